//! The generic collection query engine.

use std::sync::Arc;

use tracing::{debug, warn};

use backoffice_core::config::{InvalidIdPolicy, QueryConfig, ReferenceScope};
use backoffice_core::error::AppError;
use backoffice_core::result::AppResult;
use backoffice_core::traits::DocumentStore;
use backoffice_core::types::{Document, DocumentId, Filter, ListRequest, Page, QueryParams};
use backoffice_entity::ResourceDescriptor;

/// Lists and resolves documents of any collection.
///
/// Every plain listing is confined to one tenant; the tenant clause is
/// always the first predicate.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<dyn DocumentStore>,
    config: QueryConfig,
}

impl QueryEngine {
    /// Create an engine over `store`.
    pub fn new(store: Arc<dyn DocumentStore>, config: QueryConfig) -> Self {
        Self { store, config }
    }

    /// The injected store.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Query configuration in effect.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Run a list request against the collection of `descriptor`.
    pub async fn list(
        &self,
        descriptor: &ResourceDescriptor,
        tenant_id: &str,
        request: &ListRequest,
    ) -> AppResult<Page<Document>> {
        require_tenant(tenant_id)?;
        match request {
            ListRequest::Plain(params) => self.list_plain(descriptor, tenant_id, params).await,
            ListRequest::ReferenceExpansion { ids } => {
                let docs = self.lookup_ids(descriptor, tenant_id, ids).await?;
                Ok(Page::complete(docs))
            }
        }
    }

    async fn list_plain(
        &self,
        descriptor: &ResourceDescriptor,
        tenant_id: &str,
        params: &QueryParams,
    ) -> AppResult<Page<Document>> {
        let mut filter = Filter::for_tenant(tenant_id);
        filter.fields.extend(params.filters.iter().cloned());
        if let Some(status) = &params.status {
            filter = filter.with_status(status.value.clone());
        }

        debug!(
            tenant_id = %tenant_id,
            collection = %descriptor.collection,
            filters = filter.len(),
            offset = params.range.offset,
            limit = ?params.range.limit,
            "Listing documents"
        );

        let total = self
            .store
            .count(descriptor.collection, &filter)
            .await
            .inspect_err(|e| log_store_error(descriptor, tenant_id, e))?;
        let items = self
            .store
            .find(descriptor.collection, &filter, params.sort.as_ref(), params.range)
            .await
            .inspect_err(|e| log_store_error(descriptor, tenant_id, e))?;

        Ok(Page::new(items, total, params.range.offset))
    }

    /// Resolve id strings to documents of `descriptor`'s collection.
    ///
    /// Malformed ids follow the configured [`InvalidIdPolicy`]; tenant
    /// scoping follows the configured [`ReferenceScope`]. Result order is
    /// unspecified.
    pub async fn lookup_ids(
        &self,
        descriptor: &ResourceDescriptor,
        tenant_id: &str,
        ids: &[String],
    ) -> AppResult<Vec<Document>> {
        require_tenant(tenant_id)?;
        let parsed = self.parse_ids(descriptor, ids)?;
        if parsed.is_empty() {
            return Ok(Vec::new());
        }

        let scope = match self.config.reference_scope {
            ReferenceScope::Tenant => Filter::for_tenant(tenant_id),
            ReferenceScope::Unscoped => Filter::new(),
        };

        debug!(
            tenant_id = %tenant_id,
            collection = %descriptor.collection,
            ids = parsed.len(),
            scope = ?self.config.reference_scope,
            "Resolving document references"
        );

        self.store
            .find_by_ids(descriptor.collection, &parsed, &scope)
            .await
            .inspect_err(|e| log_store_error(descriptor, tenant_id, e))
    }

    fn parse_ids(
        &self,
        descriptor: &ResourceDescriptor,
        ids: &[String],
    ) -> AppResult<Vec<DocumentId>> {
        let mut parsed = Vec::with_capacity(ids.len());
        for raw in ids {
            match DocumentId::parse(raw) {
                Ok(id) => parsed.push(id),
                Err(e) => match self.config.invalid_id_policy {
                    InvalidIdPolicy::Reject => return Err(e),
                    InvalidIdPolicy::Skip => {
                        warn!(
                            collection = %descriptor.collection,
                            id = %raw,
                            "Skipping malformed document id"
                        );
                    }
                },
            }
        }
        Ok(parsed)
    }
}

fn require_tenant(tenant_id: &str) -> AppResult<()> {
    if tenant_id.trim().is_empty() {
        return Err(AppError::validation("merchant id must not be empty"));
    }
    Ok(())
}

fn log_store_error(descriptor: &ResourceDescriptor, tenant_id: &str, err: &AppError) {
    warn!(
        tenant_id = %tenant_id,
        collection = %descriptor.collection,
        error = %err,
        "Document store request failed"
    );
}
