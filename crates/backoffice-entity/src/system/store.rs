//! Store (outlet) master data.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Postal address with coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// A store of the merchant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub store_id: String,
    pub org_id: String,
    pub financial_subject: String,
    pub tags: String,
    pub group_id: String,
    pub category_name: String,
    pub brand_id: String,
    pub brand_name: String,
    pub desc: String,
    pub phone: String,
    /// Notice board text.
    pub bbs: String,
    /// Operating mode (direct, franchise).
    pub mode: String,
    pub working_time: String,
    pub address_info: Address,
}

impl_resource!(Store, prefix = "system_", model = "store", suffix = "_config", reference = "stores");
