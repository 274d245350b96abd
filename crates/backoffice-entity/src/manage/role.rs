//! Manager role.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A manager role listing the APIs it may call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerRole {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    /// API paths this role may access.
    pub access_api: Vec<String>,
}

impl_resource!(ManagerRole, prefix = "sys_", model = "manage_role", suffix = "", reference = "manage_roles");
