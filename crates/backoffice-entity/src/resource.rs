//! The resource abstraction shared by every document schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use backoffice_core::types::DocumentId;

/// Static description of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Model name, e.g. `"role"`.
    pub model: &'static str,
    /// Physical collection name: prefix + model + suffix.
    pub collection: &'static str,
    /// Filter key that turns a list call into a reference expansion.
    pub reference_key: &'static str,
}

/// Fields every stored document carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMeta {
    /// Store-assigned identifier; absent before creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Tenant namespace.
    pub merchant_id: String,
    /// Account that created the document.
    pub account_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: bool,
    /// Minimum role level allowed to see the document.
    pub access_level: u32,
}

/// A document schema bound to a collection.
pub trait Resource: Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    /// Collection and reference-key description.
    const DESCRIPTOR: ResourceDescriptor;

    /// Shared document fields.
    fn meta(&self) -> &DocumentMeta;

    /// Mutable shared document fields.
    fn meta_mut(&mut self) -> &mut DocumentMeta;

    /// The document id, once stored.
    fn id(&self) -> Option<DocumentId> {
        self.meta().id
    }
}

/// Implement [`Resource`] for a schema with a `meta` field.
macro_rules! impl_resource {
    ($ty:ty, prefix = $prefix:literal, model = $model:literal, suffix = $suffix:literal, reference = $reference:literal) => {
        impl $crate::resource::Resource for $ty {
            const DESCRIPTOR: $crate::resource::ResourceDescriptor =
                $crate::resource::ResourceDescriptor {
                    model: $model,
                    collection: concat!($prefix, $model, $suffix),
                    reference_key: $reference,
                };

            fn meta(&self) -> &$crate::resource::DocumentMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut $crate::resource::DocumentMeta {
                &mut self.meta
            }
        }
    };
}

pub(crate) use impl_resource;
