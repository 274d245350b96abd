use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A customer review of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub customer_id: String,
    pub product_id: String,
    pub rating: String,
    pub content: String,
    /// Moderation state of the content.
    pub content_status: String,
    /// Picture URLs.
    pub pictures: Vec<String>,
}

impl_resource!(Comment, prefix = "reviews_", model = "comment", suffix = "_config", reference = "comments");
