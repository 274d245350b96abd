//! Collection listing and reference resolution.

pub mod engine;

pub use engine::QueryEngine;
