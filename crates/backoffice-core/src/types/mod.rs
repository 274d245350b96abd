//! Core type definitions shared by the store, the query engine, and the CLI.

pub mod document;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod query;
pub mod sorting;
pub mod time;

pub use document::Document;
pub use filter::{Filter, FilterField};
pub use id::DocumentId;
pub use pagination::{Page, Range};
pub use query::{ListParams, ListRequest, QueryParams, StatusFilter};
pub use sorting::{SortDirection, SortField};
