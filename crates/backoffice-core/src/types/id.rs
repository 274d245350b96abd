//! Document identifiers.
//!
//! Ids are UUID v7 values, so sorting by id follows creation order. The
//! string form is the hyphenated UUID; anything else fails to parse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Unique identifier of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Create a new time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Parse an identifier, mapping failures to `InvalidIdentifier`.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        s.parse().map_err(|e: uuid::Error| {
            AppError::with_source(
                crate::error::ErrorKind::InvalidIdentifier,
                format!("Malformed document id '{s}'"),
                e,
            )
        })
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<DocumentId> for Uuid {
    fn from(id: DocumentId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_ids_are_ordered() {
        let first = DocumentId::new();
        let second = DocumentId::new();
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[test]
    fn test_from_str() {
        let uuid = Uuid::now_v7();
        let id: DocumentId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DocumentId::parse("64b0f0c2e4b0a1a2b3c4d5e6").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);
    }
}
