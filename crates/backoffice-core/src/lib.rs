//! # backoffice-core
//!
//! Core crate for the back-office document layer. Contains the store and
//! clock traits, configuration schemas, typed identifiers, the
//! filter/sort/range/page types consumed by the query engine, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other back-office crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
