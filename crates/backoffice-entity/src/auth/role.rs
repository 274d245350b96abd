//! Roles group applications and per-application permissions.
//!
//! A role is created by picking applications; the application details are
//! copied under the role so individual operations can later be revoked
//! for finer-grained control.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Operations a role may perform on one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub role_id: String,
    pub app_id: String,
    pub read: bool,
    pub write: bool,
    pub update: bool,
    pub detail: bool,
    pub delete: bool,
}

/// A merchant-defined role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub desc: String,
    pub image: String,
    /// Ids of the applications this role opens.
    pub apps: Vec<String>,
    pub permissions: Permissions,
}

impl_resource!(Role, prefix = "sys_", model = "role", suffix = "_config", reference = "roles");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    #[test]
    fn test_descriptor() {
        assert_eq!(Role::DESCRIPTOR.collection, "sys_role_config");
        assert_eq!(Role::DESCRIPTOR.reference_key, "roles");
    }

    #[test]
    fn test_meta_is_flattened() {
        let mut role = Role {
            name: "cashier".to_string(),
            ..Role::default()
        };
        role.meta.merchant_id = "m1".to_string();
        let value = serde_json::to_value(&role).unwrap();
        assert_eq!(value["merchant_id"], "m1");
        assert_eq!(value["name"], "cashier");
        assert!(value.get("meta").is_none());
    }
}
