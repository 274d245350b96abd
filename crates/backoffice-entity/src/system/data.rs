use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A data visibility level (public, organisation, group).
///
/// A role at level 1 can only read public data; documents record the
/// lowest level allowed to see them in `access_level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLevel {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub desc: String,
}

impl_resource!(DataLevel, prefix = "sys_", model = "data", suffix = "_config", reference = "datas");
