//! Supplier master data.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A goods supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub cargo_owner: String,
    pub supplier_id: String,
    pub supplier_name: String,
    /// Short code used for quick lookup.
    pub mnemonic: String,
    pub supplier_category: String,
    pub supplier_contact: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl_resource!(Supplier, prefix = "scm_", model = "supplier", suffix = "_config", reference = "suppliers");
