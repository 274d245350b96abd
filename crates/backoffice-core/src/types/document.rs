//! The opaque document representation and its well-known fields.

use serde_json::{Map, Value};

/// A stored document: field name to JSON value.
pub type Document = Map<String, Value>;

/// Identifier field.
pub const ID_FIELD: &str = "id";
/// Tenant namespace field.
pub const TENANT_FIELD: &str = "merchant_id";
/// Status field targeted by the status filter.
pub const STATUS_FIELD: &str = "status";
/// Creation timestamp field.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Last-update timestamp field.
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Fields an update payload may never overwrite.
pub const IMMUTABLE_FIELDS: [&str; 3] = [ID_FIELD, TENANT_FIELD, CREATED_AT_FIELD];

/// Whether a value counts as "not supplied" in a partial merge.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Build the `$set` payload of a partial merge.
///
/// Drops immutable fields and empty values; everything else replaces the
/// stored top-level field of the same name.
pub fn merge_patch(payload: Document) -> Document {
    payload
        .into_iter()
        .filter(|(key, value)| !IMMUTABLE_FIELDS.contains(&key.as_str()) && !is_empty_value(value))
        .collect()
}

/// Keep only the fields of `payload` that differ from `defaults`.
///
/// Used for typed updates, where every unset field still serializes to its
/// default. A nested object that differs anywhere is kept whole, since the
/// merge replaces top-level fields.
pub fn changed_fields(payload: Document, defaults: &Document) -> Document {
    payload
        .into_iter()
        .filter(|(key, value)| defaults.get(key) != Some(value))
        .collect()
}

/// Resolve a dotted field path (`user_info.phone`) inside a document.
pub fn lookup_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = doc.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    #[test]
    fn test_merge_patch_drops_empty_and_immutable() {
        let patch = merge_patch(doc(json!({
            "id": "x",
            "merchant_id": "m2",
            "created_at": "2020-01-01 00:00:00",
            "name": "lunch",
            "desc": "",
            "apps": [],
            "status": false,
            "access_level": 0,
            "permissions": {"read": true}
        })));
        let keys: Vec<&str> = patch.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["name", "status", "access_level", "permissions"] {
            assert!(patch.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_changed_fields_drops_defaults() {
        let defaults = doc(json!({
            "name": "",
            "status": false,
            "access_level": 0,
            "permissions": {"read": false, "app_id": ""}
        }));
        let changed = changed_fields(
            doc(json!({
                "name": "chef",
                "status": false,
                "access_level": 0,
                "permissions": {"read": true, "app_id": ""},
                "extra": 1
            })),
            &defaults,
        );
        assert_eq!(
            changed,
            doc(json!({"name": "chef", "permissions": {"read": true, "app_id": ""}, "extra": 1}))
        );
    }

    #[test]
    fn test_lookup_nested_path() {
        let d = doc(json!({"user_info": {"phone": "138"}, "name": "a"}));
        assert_eq!(lookup_path(&d, "user_info.phone"), Some(&json!("138")));
        assert_eq!(lookup_path(&d, "name"), Some(&json!("a")));
        assert_eq!(lookup_path(&d, "name.first"), None);
        assert_eq!(lookup_path(&d, "missing"), None);
    }
}
