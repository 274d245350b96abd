//! Typed CRUD over one collection.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use backoffice_core::error::AppError;
use backoffice_core::result::AppResult;
use backoffice_core::traits::{Clock, DocumentStore};
use backoffice_core::types::document::{UPDATED_AT_FIELD, changed_fields, merge_patch};
use backoffice_core::types::{Document, DocumentId, Filter, ListParams, ListRequest, Page};
use backoffice_entity::{Resource, ResourceDescriptor};

use crate::query::QueryEngine;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A document was removed.
    Deleted,
    /// No document matched; not an error.
    NothingDeleted,
}

/// Repository for one resource type.
///
/// All single-document operations are scoped to the caller's tenant.
pub struct CollectionRepository<T> {
    engine: Arc<QueryEngine>,
    clock: Arc<dyn Clock>,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            clock: Arc::clone(&self.clock),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> fmt::Debug for CollectionRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionRepository")
            .field("collection", &T::DESCRIPTOR.collection)
            .field("clock", &self.clock)
            .finish()
    }
}

impl<T: Resource> CollectionRepository<T> {
    /// Create a repository sharing `engine`.
    pub fn new(engine: Arc<QueryEngine>, clock: Arc<dyn Clock>) -> Self {
        Self {
            engine,
            clock,
            _resource: PhantomData,
        }
    }

    /// The collection this repository works on.
    pub fn descriptor(&self) -> ResourceDescriptor {
        T::DESCRIPTOR
    }

    fn store(&self) -> &Arc<dyn DocumentStore> {
        self.engine.store()
    }

    fn collection(&self) -> &'static str {
        T::DESCRIPTOR.collection
    }

    /// Store a new document for `tenant_id` and return its id.
    ///
    /// The id, tenant, and both timestamps are assigned here; whatever the
    /// caller put in those fields is replaced.
    pub async fn create(&self, tenant_id: &str, mut resource: T) -> AppResult<DocumentId> {
        require_tenant(tenant_id)?;
        let id = DocumentId::new();
        let now = self.clock.timestamp();
        let meta = resource.meta_mut();
        meta.id = Some(id);
        meta.merchant_id = tenant_id.to_string();
        meta.created_at = now.clone();
        meta.updated_at = now;

        let document = encode(&resource)?;
        self.store().insert(self.collection(), id, document).await?;

        info!(
            tenant_id = %tenant_id,
            collection = %self.collection(),
            id = %id,
            "Document created"
        );
        Ok(id)
    }

    /// Load one document of the tenant.
    pub async fn detail(&self, tenant_id: &str, id: &str) -> AppResult<T> {
        require_tenant(tenant_id)?;
        let id = DocumentId::parse(id)?;
        let document = self
            .store()
            .find_one(self.collection(), id, &Filter::for_tenant(tenant_id))
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("{} {id} not found", T::DESCRIPTOR.model))
            })?;
        decode(document)
    }

    /// Partially update a document from a typed value.
    ///
    /// Fields still at their default leave the stored values untouched, so
    /// an explicit `false` or `0` can only be written through
    /// [`update_fields`](Self::update_fields).
    pub async fn update(&self, tenant_id: &str, id: &str, resource: &T) -> AppResult<()> {
        let payload = changed_fields(encode(resource)?, &encode(&T::default())?);
        self.update_fields(tenant_id, id, payload).await
    }

    /// Partially update a document from a raw field map.
    ///
    /// Empty values and immutable fields are ignored; `false` and `0` are
    /// written.
    pub async fn update_fields(&self, tenant_id: &str, id: &str, payload: Document) -> AppResult<()> {
        require_tenant(tenant_id)?;
        let id = DocumentId::parse(id)?;
        let mut patch = merge_patch(payload);
        patch.insert(UPDATED_AT_FIELD.to_string(), Value::String(self.clock.timestamp()));

        debug!(
            tenant_id = %tenant_id,
            collection = %self.collection(),
            id = %id,
            fields = patch.len(),
            "Updating document"
        );

        let matched = self
            .store()
            .merge(self.collection(), id, &Filter::for_tenant(tenant_id), patch)
            .await?;
        if matched == 0 {
            return Err(AppError::not_matched(format!(
                "no {} with id {id} for this merchant",
                T::DESCRIPTOR.model
            )));
        }
        Ok(())
    }

    /// Remove one document of the tenant.
    pub async fn delete(&self, tenant_id: &str, id: &str) -> AppResult<DeleteOutcome> {
        require_tenant(tenant_id)?;
        let id = DocumentId::parse(id)?;
        let deleted = self
            .store()
            .delete(self.collection(), id, &Filter::for_tenant(tenant_id))
            .await?;
        if deleted == 0 {
            warn!(
                tenant_id = %tenant_id,
                collection = %self.collection(),
                id = %id,
                "Nothing deleted"
            );
            return Ok(DeleteOutcome::NothingDeleted);
        }
        info!(
            tenant_id = %tenant_id,
            collection = %self.collection(),
            id = %id,
            "Document deleted"
        );
        Ok(DeleteOutcome::Deleted)
    }

    /// Run a list request and decode the page.
    pub async fn list(&self, tenant_id: &str, request: &ListRequest) -> AppResult<Page<T>> {
        self.engine
            .list(&T::DESCRIPTOR, tenant_id, request)
            .await?
            .try_map(decode)
    }

    /// Parse admin-UI list parameters for this resource and run them.
    pub async fn list_with(&self, tenant_id: &str, params: ListParams) -> AppResult<Page<T>> {
        let request = params.into_request(T::DESCRIPTOR.reference_key, self.engine.config())?;
        self.list(tenant_id, &request).await
    }

    /// Resolve a set of id strings.
    pub async fn get_many(&self, tenant_id: &str, ids: &[String]) -> AppResult<Vec<T>> {
        self.engine
            .lookup_ids(&T::DESCRIPTOR, tenant_id, ids)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// First document matching `filter`, across tenants.
    pub(crate) async fn find_first(&self, filter: &Filter) -> AppResult<Option<T>> {
        self.store()
            .find_first(self.collection(), filter)
            .await?
            .map(decode)
            .transpose()
    }
}

fn require_tenant(tenant_id: &str) -> AppResult<()> {
    if tenant_id.trim().is_empty() {
        return Err(AppError::validation("merchant id must not be empty"));
    }
    Ok(())
}

fn encode<T: Resource>(resource: &T) -> AppResult<Document> {
    match serde_json::to_value(resource)? {
        Value::Object(document) => Ok(document),
        other => Err(AppError::serialization(format!(
            "{} did not serialize to an object: {other}",
            T::DESCRIPTOR.model
        ))),
    }
}

fn decode<T: Resource>(document: Document) -> AppResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
