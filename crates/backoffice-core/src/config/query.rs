//! Query engine configuration.

use serde::{Deserialize, Serialize};

/// Whether an identifiers lookup re-checks tenant ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceScope {
    /// Add `merchant_id = tenant` to the membership fetch.
    Tenant,
    /// Fetch by id only; documents of other tenants can be returned.
    Unscoped,
}

/// What to do with identifier strings that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidIdPolicy {
    /// Drop the malformed id and keep going.
    Skip,
    /// Fail the whole lookup with `InvalidIdentifier`.
    Reject,
}

/// List/lookup behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page size used when the caller supplies no range.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Upper bound applied to caller-supplied ranges.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
    /// Tenant scoping of reference expansion.
    #[serde(default = "default_reference_scope")]
    pub reference_scope: ReferenceScope,
    /// Handling of malformed identifiers in reference expansion.
    #[serde(default = "default_invalid_id_policy")]
    pub invalid_id_policy: InvalidIdPolicy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            reference_scope: default_reference_scope(),
            invalid_id_policy: default_invalid_id_policy(),
        }
    }
}

fn default_limit() -> u64 {
    25
}

fn default_max_limit() -> u64 {
    1000
}

fn default_reference_scope() -> ReferenceScope {
    ReferenceScope::Tenant
}

fn default_invalid_id_policy() -> InvalidIdPolicy {
    InvalidIdPolicy::Skip
}
