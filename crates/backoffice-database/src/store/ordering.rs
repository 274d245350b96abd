//! Total order over JSON values, matching PostgreSQL `jsonb` btree order.
//!
//! Type rank: null < string < number < boolean < array < object. Arrays
//! and objects compare by length first, then element-wise.

use std::cmp::Ordering;

use serde_json::Value;

use backoffice_core::types::document::{Document, lookup_path};
use backoffice_core::types::{SortDirection, SortField};

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(_) => 1,
        Value::Number(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Compare two JSON values.
pub fn compare_json(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|(l, r)| compare_json(l, r))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|((lk, lv), (rk, rv))| lk.cmp(rk).then_with(|| compare_json(lv, rv)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Compare two documents on a sort field.
///
/// A missing field sorts after every value in ascending order and before
/// every value in descending order, like SQL `NULL`.
pub fn compare_documents(a: &Document, b: &Document, sort: &SortField) -> Ordering {
    let ordering = match (lookup_path(a, &sort.field), lookup_path(b, &sort.field)) {
        (Some(x), Some(y)) => compare_json(x, y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_rank() {
        let ordered = [
            json!(null),
            json!("z"),
            json!(-1),
            json!(false),
            json!([1]),
            json!({"a": 1}),
        ];
        for pair in ordered.windows(2) {
            assert_eq!(compare_json(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(compare_json(&json!(9), &json!(10.5)), Ordering::Less);
        assert_eq!(compare_json(&json!(2), &json!(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_missing_field_position() {
        let with = json!({"name": "a"}).as_object().cloned().unwrap();
        let without = json!({}).as_object().cloned().unwrap();
        assert_eq!(
            compare_documents(&with, &without, &SortField::asc("name")),
            Ordering::Less
        );
        assert_eq!(
            compare_documents(&with, &without, &SortField::desc("name")),
            Ordering::Greater
        );
    }
}
