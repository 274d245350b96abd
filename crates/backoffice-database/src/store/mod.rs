//! Document store backends.

pub mod memory;
pub mod ordering;
pub mod postgres;

use std::sync::Arc;

use tracing::info;

use backoffice_core::config::{DatabaseConfig, StoreBackend};
use backoffice_core::result::AppResult;
use backoffice_core::traits::DocumentStore;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use crate::connection::DatabasePool;

/// Open the store selected by `config.backend`.
///
/// The PostgreSQL backend connects eagerly and, when `auto_migrate` is
/// set, brings the schema up to date before returning. The memory backend
/// starts empty.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Postgres => {
            let db = DatabasePool::open(config).await?;
            Ok(Arc::new(PgDocumentStore::new(db.into_pool())))
        }
        StoreBackend::Memory => {
            info!(backend = "memory", "Opening document store");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}
