//! Manager account.
//!
//! In standalone deployments the merchant id is a fixed value and the
//! account whose phone matches the configured admin phone is the
//! administrator. In other deployments `merchant_id` is the namespace and
//! admin rights are granted by the platform.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Environment key naming the deployment mode.
pub const DEPLOY_MODE_KEY: &str = "DEPLOY_MODE";
/// `DEPLOY_MODE` value of a single-merchant deployment.
pub const STANDALONE_MODE_VALUE: &str = "standalone";

/// A manager sign-in account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerAccount {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub is_required_approve: bool,
    pub is_admin: bool,
    pub phone: String,
    pub password: String,
    pub name: String,
    pub email: String,
    /// Role names.
    pub roles: Vec<String>,
}

impl_resource!(ManagerAccount, prefix = "sys_", model = "manage_account", suffix = "", reference = "account");
