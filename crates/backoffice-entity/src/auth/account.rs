//! Staff sign-in account.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A staff account of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    /// Whether the account has administrator rights.
    pub is_admin: bool,
    pub phone: String,
    /// Password hash; never the clear text.
    pub password: String,
    /// Whether new sign-ins need approval.
    pub is_required_approve: bool,
    pub name: String,
    pub email: String,
    /// Ids of the roles granted to this account.
    pub roles: Vec<String>,
}

impl_resource!(Account, prefix = "auth_", model = "account", suffix = "_config", reference = "accounts");
