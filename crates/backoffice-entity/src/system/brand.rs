use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A brand operated by the merchant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub category_id: String,
    pub category_name: String,
    pub logo_url: String,
    pub desc: String,
}

impl_resource!(Brand, prefix = "system_", model = "brand", suffix = "_config", reference = "brands");
