//! # backoffice-entity
//!
//! Document schemas for every back-office collection. Each schema embeds
//! the shared [`DocumentMeta`] fields and implements [`Resource`], which
//! ties it to its collection name and the filter key that triggers
//! reference expansion.

pub mod affiliate;
pub mod auth;
pub mod catalog;
pub mod command;
pub mod dishes;
pub mod manage;
pub mod resource;
pub mod reviews;
pub mod scm;
pub mod system;
pub mod trade;

pub use catalog::ResourceKind;
pub use resource::{DocumentMeta, Resource, ResourceDescriptor};
