//! List requests and their parsing from admin-UI query parameters.
//!
//! The wire convention is three JSON-encoded parameters:
//! `filter={"name":"bar"}`, `sort=["name","ASC"]`, `range=[0,24]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{ID_FIELD, STATUS_FIELD};
use super::filter::FilterField;
use super::pagination::Range;
use super::sorting::{SortDirection, SortField};
use crate::config::QueryConfig;
use crate::error::AppError;
use crate::result::AppResult;

/// Optional predicate on the `status` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusFilter {
    /// Required status value (usually a boolean).
    pub value: Value,
}

/// Filter, sort, and pagination for a plain listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Equality predicates, all of which must hold.
    #[serde(default)]
    pub filters: Vec<FilterField>,
    /// Sort order; id order when absent.
    #[serde(default)]
    pub sort: Option<SortField>,
    /// Window over the sorted result.
    #[serde(default)]
    pub range: Range,
    /// Status predicate, applied only when present.
    #[serde(default)]
    pub status: Option<StatusFilter>,
}

impl QueryParams {
    /// Parameters matching everything, unsorted, unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FilterField::eq(field, value));
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the window.
    pub fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Require a status value.
    pub fn status(mut self, value: impl Into<Value>) -> Self {
        self.status = Some(StatusFilter {
            value: value.into(),
        });
        self
    }
}

/// What a list call should do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListRequest {
    /// Filter, count, sort, and paginate within the tenant.
    Plain(QueryParams),
    /// Resolve a list of document ids directly.
    ReferenceExpansion {
        /// Identifier strings; malformed ones follow the invalid-id policy.
        ids: Vec<String>,
    },
}

impl From<QueryParams> for ListRequest {
    fn from(params: QueryParams) -> Self {
        Self::Plain(params)
    }
}

/// Raw admin-UI list parameters, each a JSON string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// JSON object of field to value.
    #[serde(default)]
    pub filter: Option<String>,
    /// JSON array `["field", "ASC"|"DESC"]`.
    #[serde(default)]
    pub sort: Option<String>,
    /// JSON array `[start, end]`, inclusive.
    #[serde(default)]
    pub range: Option<String>,
}

impl ListParams {
    /// Turn raw parameters into a request for the resource whose
    /// reference key is `reference_key`.
    ///
    /// A filter naming `reference_key` or `id` makes the request a
    /// reference expansion; everything else in the filter is then ignored.
    pub fn into_request(self, reference_key: &str, config: &QueryConfig) -> AppResult<ListRequest> {
        let mut filter = match non_blank(self.filter.as_deref()) {
            Some(raw) => serde_json::from_str::<serde_json::Map<String, Value>>(raw)
                .map_err(|e| AppError::validation(format!("Invalid filter parameter: {e}")))?,
            None => serde_json::Map::new(),
        };

        if let Some(ids) = filter.get(reference_key).or_else(|| filter.get(ID_FIELD)) {
            return Ok(ListRequest::ReferenceExpansion {
                ids: id_list(ids)?,
            });
        }

        let status = filter
            .remove(STATUS_FIELD)
            .map(|value| StatusFilter { value });

        let sort = match non_blank(self.sort.as_deref()) {
            Some(raw) => Some(parse_sort(raw)?),
            None => None,
        };

        let range = match non_blank(self.range.as_deref()) {
            Some(raw) => parse_range(raw)?.clamped(config.max_limit),
            None => Range::new(0, config.default_limit),
        };

        Ok(ListRequest::Plain(QueryParams {
            filters: filter
                .into_iter()
                .map(|(field, value)| FilterField { field, value })
                .collect(),
            sort,
            range,
            status,
        }))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn id_list(value: &Value) -> AppResult<Vec<String>> {
    match value {
        Value::String(id) => Ok(vec![id.clone()]),
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| match item {
                Value::String(id) => id.clone(),
                other => other.to_string(),
            })
            .collect()),
        other => Err(AppError::validation(format!(
            "Reference filter must be an id or a list of ids, got {other}"
        ))),
    }
}

fn parse_sort(raw: &str) -> AppResult<SortField> {
    let parts: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| AppError::validation(format!("Invalid sort parameter: {e}")))?;
    match parts.as_slice() {
        [field] => Ok(SortField::asc(field.as_str())),
        [field, direction] => Ok(SortField::new(
            field.as_str(),
            direction.parse::<SortDirection>()?,
        )),
        _ => Err(AppError::validation(
            "Sort parameter must be [\"field\", \"ASC\"|\"DESC\"]",
        )),
    }
}

fn parse_range(raw: &str) -> AppResult<Range> {
    let bounds: Vec<u64> = serde_json::from_str(raw)
        .map_err(|e| AppError::validation(format!("Invalid range parameter: {e}")))?;
    match bounds.as_slice() {
        [start, end] => Ok(Range::from_bounds(*start, *end)),
        _ => Err(AppError::validation("Range parameter must be [start, end]")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(filter: Option<&str>, sort: Option<&str>, range: Option<&str>) -> ListParams {
        ListParams {
            filter: filter.map(str::to_string),
            sort: sort.map(str::to_string),
            range: range.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_request() {
        let request = params(
            Some(r#"{"name":"bar","status":true}"#),
            Some(r#"["name","DESC"]"#),
            Some("[0, 24]"),
        )
        .into_request("roles", &QueryConfig::default())
        .unwrap();

        let ListRequest::Plain(query) = request else {
            panic!("expected a plain request");
        };
        assert_eq!(query.filters, vec![FilterField::eq("name", "bar")]);
        assert_eq!(query.sort, Some(SortField::desc("name")));
        assert_eq!(query.range, Range::new(0, 25));
        assert_eq!(query.status, Some(StatusFilter { value: json!(true) }));
    }

    #[test]
    fn test_reference_key_wins_over_other_filters() {
        let request = params(Some(r#"{"roles":["id1","id2"],"name":"bar"}"#), None, None)
            .into_request("roles", &QueryConfig::default())
            .unwrap();
        assert_eq!(
            request,
            ListRequest::ReferenceExpansion {
                ids: vec!["id1".to_string(), "id2".to_string()]
            }
        );
    }

    #[test]
    fn test_id_key_with_single_value() {
        let request = params(Some(r#"{"id":"abc"}"#), None, None)
            .into_request("brands", &QueryConfig::default())
            .unwrap();
        assert_eq!(
            request,
            ListRequest::ReferenceExpansion {
                ids: vec!["abc".to_string()]
            }
        );
    }

    #[test]
    fn test_defaults_and_clamping() {
        let config = QueryConfig {
            default_limit: 10,
            max_limit: 50,
            ..QueryConfig::default()
        };
        let ListRequest::Plain(query) = params(None, None, None)
            .into_request("roles", &config)
            .unwrap()
        else {
            panic!("expected a plain request");
        };
        assert_eq!(query.range, Range::new(0, 10));
        assert!(query.sort.is_none());

        let ListRequest::Plain(query) = params(None, None, Some("[0, 999]"))
            .into_request("roles", &config)
            .unwrap()
        else {
            panic!("expected a plain request");
        };
        assert_eq!(query.range, Range::new(0, 50));
    }

    #[test]
    fn test_widest_range_does_not_overflow() {
        let config = QueryConfig::default();
        let ListRequest::Plain(query) = params(None, None, Some("[0, 18446744073709551615]"))
            .into_request("roles", &config)
            .unwrap()
        else {
            panic!("expected a plain request");
        };
        assert_eq!(query.range, Range::new(0, config.max_limit));
    }

    #[test]
    fn test_malformed_parameters_are_validation_errors() {
        let config = QueryConfig::default();
        for bad in [
            params(Some("{nope"), None, None),
            params(None, Some(r#"["name","UP"]"#), None),
            params(None, None, Some("[1]")),
            params(Some(r#"{"roles": 5}"#), None, None),
        ] {
            let err = bad.into_request("roles", &config).unwrap_err();
            assert_eq!(err.kind, crate::error::ErrorKind::Validation);
        }
    }
}
