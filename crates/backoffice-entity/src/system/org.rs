use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// An organisation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
}

impl_resource!(Organization, prefix = "sys_", model = "org", suffix = "_config", reference = "orgs");
