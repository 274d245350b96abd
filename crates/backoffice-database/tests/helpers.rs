//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use backoffice_core::config::QueryConfig;
use backoffice_core::error::{AppError, ErrorKind};
use backoffice_core::result::AppResult;
use backoffice_core::traits::{DocumentStore, FixedClock};
use backoffice_core::types::{Document, DocumentId, Filter, Range, SortField};
use backoffice_database::{CollectionRepository, MemoryDocumentStore, QueryEngine};
use backoffice_entity::Resource;
use backoffice_entity::auth::Role;

/// Test application context over an in-memory store.
pub struct TestApp {
    /// The store, for direct inspection.
    pub store: MemoryDocumentStore,
    /// Engine shared by every repository.
    pub engine: Arc<QueryEngine>,
    /// Frozen clock.
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Create a context with the default query configuration.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    /// Create a context with a custom query configuration.
    pub fn with_config(config: QueryConfig) -> Self {
        let store = MemoryDocumentStore::new();
        let engine = Arc::new(QueryEngine::new(Arc::new(store.clone()), config));
        Self {
            store,
            engine,
            clock: Arc::new(fixed_clock()),
        }
    }

    /// A repository for `T`.
    pub fn repo<T: Resource>(&self) -> CollectionRepository<T> {
        CollectionRepository::new(Arc::clone(&self.engine), self.clock.clone())
    }

    /// Create a role named `name` for `tenant` and return its id.
    pub async fn create_role(&self, tenant: &str, name: &str) -> String {
        self.repo::<Role>()
            .create(tenant, role(name))
            .await
            .expect("Failed to create role")
            .to_string()
    }
}

/// A role with only a name.
pub fn role(name: &str) -> Role {
    Role {
        name: name.to_string(),
        ..Role::default()
    }
}

/// Clock frozen at 2024-05-01 08:30:00 UTC.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}

/// Names of a list of roles, in order.
pub fn names(roles: &[Role]) -> Vec<&str> {
    roles.iter().map(|r| r.name.as_str()).collect()
}

/// A store whose every call fails as if the connection dropped.
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable() -> AppError {
    AppError::with_source(
        ErrorKind::StoreUnavailable,
        "connection refused",
        std::io::Error::other("connection refused"),
    )
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _: &str, _: DocumentId, _: Document) -> AppResult<()> {
        Err(unavailable())
    }

    async fn find_one(&self, _: &str, _: DocumentId, _: &Filter) -> AppResult<Option<Document>> {
        Err(unavailable())
    }

    async fn find_first(&self, _: &str, _: &Filter) -> AppResult<Option<Document>> {
        Err(unavailable())
    }

    async fn find(
        &self,
        _: &str,
        _: &Filter,
        _: Option<&SortField>,
        _: Range,
    ) -> AppResult<Vec<Document>> {
        Err(unavailable())
    }

    async fn count(&self, _: &str, _: &Filter) -> AppResult<u64> {
        Err(unavailable())
    }

    async fn find_by_ids(&self, _: &str, _: &[DocumentId], _: &Filter) -> AppResult<Vec<Document>> {
        Err(unavailable())
    }

    async fn merge(&self, _: &str, _: DocumentId, _: &Filter, _: Document) -> AppResult<u64> {
        Err(unavailable())
    }

    async fn delete(&self, _: &str, _: DocumentId, _: &Filter) -> AppResult<u64> {
        Err(unavailable())
    }
}
