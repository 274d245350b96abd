//! Equality predicates for document queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{STATUS_FIELD, TENANT_FIELD};

/// A single equality condition on a (possibly dotted) field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The field name; dots address nested fields.
    pub field: String,
    /// The value the field must equal.
    pub value: Value,
}

impl FilterField {
    /// Shorthand for an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The field split into path segments.
    pub fn path(&self) -> Vec<&str> {
        self.field.split('.').collect()
    }
}

/// An ordered conjunction of equality predicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Predicates, all of which must hold.
    pub fields: Vec<FilterField>,
}

impl Filter {
    /// An empty filter matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter seeded with the tenant clause.
    pub fn for_tenant(tenant_id: &str) -> Self {
        Self::new().and(FilterField::eq(TENANT_FIELD, tenant_id))
    }

    /// Append a predicate.
    pub fn and(mut self, field: FilterField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append an equality predicate in place.
    pub fn push_eq(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.push(FilterField::eq(field, value));
    }

    /// Append the status predicate.
    pub fn with_status(self, status: Value) -> Self {
        self.and(FilterField::eq(STATUS_FIELD, status))
    }

    /// Whether the filter has no predicates.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over the predicates.
    pub fn iter(&self) -> impl Iterator<Item = &FilterField> {
        self.fields.iter()
    }
}
