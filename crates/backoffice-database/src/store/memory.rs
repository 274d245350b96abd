//! In-memory document store for tests and single-process use.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use backoffice_core::result::AppResult;
use backoffice_core::traits::DocumentStore;
use backoffice_core::types::document::lookup_path;
use backoffice_core::types::{Document, DocumentId, Filter, Range, SortField};

use super::ordering::{compare_documents, compare_json};

type Collection = BTreeMap<DocumentId, Document>;

/// Document store holding every collection in process memory.
///
/// Documents are kept in id order, so unsorted listings come back in
/// creation order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

/// Equality as `jsonb =` sees it: `2` and `2.0` are the same number.
fn matches(doc: &Document, filter: &Filter) -> bool {
    filter.iter().all(|field| {
        lookup_path(doc, &field.field)
            .is_some_and(|value| compare_json(value, &field.value) == Ordering::Equal)
    })
}

fn window<T>(items: Vec<T>, range: Range) -> Vec<T> {
    let offset = usize::try_from(range.offset).unwrap_or(usize::MAX);
    let iter = items.into_iter().skip(offset);
    match range.limit {
        Some(limit) => iter.take(usize::try_from(limit).unwrap_or(usize::MAX)).collect(),
        None => iter.collect(),
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, id: DocumentId, document: Document) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, document);
        debug!(collection = %collection, id = %id, "Document inserted");
        Ok(())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
    ) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(&id))
            .filter(|doc| matches(doc, scope))
            .cloned())
    }

    async fn find_first(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.values().find(|doc| matches(doc, filter)))
            .cloned())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort: Option<&SortField>,
        range: Range,
    ) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut selected: Vec<&Document> =
            docs.values().filter(|doc| matches(doc, filter)).collect();
        // Stable sort keeps id order among equal keys.
        if let Some(sort) = sort {
            selected.sort_by(|a, b| compare_documents(a, b, sort));
        }

        Ok(window(selected, range).into_iter().cloned().collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| {
            docs.values().filter(|doc| matches(doc, filter)).count() as u64
        }))
    }

    async fn find_by_ids(
        &self,
        collection: &str,
        ids: &[DocumentId],
        scope: &Filter,
    ) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        let mut wanted: Vec<DocumentId> = ids.to_vec();
        wanted.sort();
        wanted.dedup();
        Ok(wanted
            .iter()
            .filter_map(|id| docs.get(id))
            .filter(|doc| matches(doc, scope))
            .cloned()
            .collect())
    }

    async fn merge(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
        patch: Document,
    ) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(&id))
            .filter(|doc| matches(doc, scope))
        else {
            return Ok(0);
        };
        doc.extend(patch);
        Ok(1)
    }

    async fn delete(&self, collection: &str, id: DocumentId, scope: &Filter) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        if docs.get(&id).is_some_and(|doc| matches(doc, scope)) {
            docs.remove(&id);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
