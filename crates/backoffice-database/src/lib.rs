//! # backoffice-database
//!
//! Document store implementations (PostgreSQL JSONB and in-memory), the
//! generic collection query engine, and the typed repository every
//! resource shares.

pub mod connection;
pub mod query;
pub mod repositories;
pub mod store;

pub use connection::{DatabasePool, StoreHealth};
pub use query::QueryEngine;
pub use repositories::{CollectionRepository, DeleteOutcome};
pub use store::{MemoryDocumentStore, PgDocumentStore, open_store};
