//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Document, DocumentId, Filter, Range, SortField};

/// A collection-oriented document store.
///
/// Collections are addressed by name. Every `scope` / `filter` argument is
/// a conjunction of equality predicates; an empty filter matches all
/// documents of the collection. Failures talking to the backend surface as
/// `StoreUnavailable`; implementations never retry.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new document under `id`. The body already carries its `id`.
    async fn insert(&self, collection: &str, id: DocumentId, document: Document) -> AppResult<()>;

    /// Fetch the document with `id` if it also matches `scope`.
    async fn find_one(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
    ) -> AppResult<Option<Document>>;

    /// Fetch the first document matching `filter`, in id order.
    async fn find_first(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>>;

    /// Fetch matching documents ordered by `sort` then id, windowed by `range`.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort: Option<&SortField>,
        range: Range,
    ) -> AppResult<Vec<Document>>;

    /// Count documents matching `filter`.
    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// Fetch every document whose id is in `ids` and that matches `scope`.
    /// Result order is unspecified.
    async fn find_by_ids(
        &self,
        collection: &str,
        ids: &[DocumentId],
        scope: &Filter,
    ) -> AppResult<Vec<Document>>;

    /// Overwrite the top-level fields in `patch` on the document with `id`
    /// matching `scope`. Returns the number of matched documents.
    async fn merge(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
        patch: Document,
    ) -> AppResult<u64>;

    /// Remove the document with `id` matching `scope`. Returns the number
    /// of deleted documents.
    async fn delete(&self, collection: &str, id: DocumentId, scope: &Filter) -> AppResult<u64>;
}
