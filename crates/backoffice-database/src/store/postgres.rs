//! PostgreSQL JSONB document store.
//!
//! Every collection lives in the single `documents` table. Equality
//! predicates compile to `body #> path = value`, except a string tenant
//! predicate, which uses the indexed `merchant_id` column.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use backoffice_core::error::{AppError, ErrorKind};
use backoffice_core::result::AppResult;
use backoffice_core::traits::DocumentStore;
use backoffice_core::types::document::TENANT_FIELD;
use backoffice_core::types::{Document, DocumentId, Filter, Range, SortField};

/// Document store backed by a PostgreSQL `documents` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new PostgreSQL document store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) fn store_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::StoreUnavailable, format!("Failed to {action}"), e)
}

fn path_segments(field: &str) -> Vec<String> {
    field.split('.').map(str::to_string).collect()
}

/// Append `WHERE collection = .. AND <predicates>`.
fn push_where(qb: &mut QueryBuilder<'_, Postgres>, collection: &str, filter: &Filter) {
    qb.push(" WHERE collection = ");
    qb.push_bind(collection.to_string());
    for field in filter.iter() {
        match (&field.value, field.field.as_str()) {
            (Value::String(tenant), TENANT_FIELD) => {
                qb.push(" AND merchant_id = ");
                qb.push_bind(tenant.clone());
            }
            _ => {
                qb.push(" AND body #> ");
                qb.push_bind(path_segments(&field.field));
                qb.push(" = ");
                qb.push_bind(Json(field.value.clone()));
            }
        }
    }
}

/// Convert a window bound to the `BIGINT` PostgreSQL expects.
fn sql_bound(value: u64, name: &str) -> AppResult<i64> {
    i64::try_from(value)
        .map_err(|_| AppError::validation(format!("Range {name} {value} is out of bounds")))
}

fn select_query<'a>(
    collection: &str,
    filter: &Filter,
    sort: Option<&SortField>,
    range: Range,
) -> AppResult<QueryBuilder<'a, Postgres>> {
    let mut qb = QueryBuilder::new("SELECT body FROM documents");
    push_where(&mut qb, collection, filter);
    qb.push(" ORDER BY ");
    if let Some(sort) = sort {
        qb.push("body #> ");
        qb.push_bind(path_segments(&sort.field));
        qb.push(" ");
        qb.push(sort.direction.as_sql());
        qb.push(", ");
    }
    qb.push("id ASC");
    if let Some(limit) = range.limit {
        qb.push(" LIMIT ");
        qb.push_bind(sql_bound(limit, "limit")?);
    }
    if range.offset > 0 {
        qb.push(" OFFSET ");
        qb.push_bind(sql_bound(range.offset, "offset")?);
    }
    Ok(qb)
}

fn count_query<'a>(collection: &str, filter: &Filter) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM documents");
    push_where(&mut qb, collection, filter);
    qb
}

fn by_id_query<'a>(
    head: &'static str,
    collection: &str,
    id: DocumentId,
    scope: &Filter,
) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new(head);
    push_where(&mut qb, collection, scope);
    qb.push(" AND id = ");
    qb.push_bind(id.into_uuid());
    qb
}

fn merge_query<'a>(
    collection: &str,
    id: DocumentId,
    scope: &Filter,
    patch: Document,
) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("UPDATE documents SET body = body || ");
    qb.push_bind(Json(patch));
    push_where(&mut qb, collection, scope);
    qb.push(" AND id = ");
    qb.push_bind(id.into_uuid());
    qb
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, id: DocumentId, document: Document) -> AppResult<()> {
        let merchant_id = document
            .get(TENANT_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        sqlx::query(
            "INSERT INTO documents (collection, id, merchant_id, body) VALUES ($1, $2, $3, $4)",
        )
        .bind(collection)
        .bind(id.into_uuid())
        .bind(merchant_id)
        .bind(Json(document))
        .execute(&self.pool)
        .await
        .map_err(store_error("insert document"))?;
        Ok(())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
    ) -> AppResult<Option<Document>> {
        let mut qb = by_id_query("SELECT body FROM documents", collection, id, scope);
        let row = qb
            .build_query_scalar::<Json<Document>>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("find document"))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn find_first(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        let mut qb = select_query(collection, filter, None, Range::new(0, 1))?;
        let row = qb
            .build_query_scalar::<Json<Document>>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("find document"))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort: Option<&SortField>,
        range: Range,
    ) -> AppResult<Vec<Document>> {
        if range.limit == Some(0) {
            return Ok(Vec::new());
        }
        let mut qb = select_query(collection, filter, sort, range)?;
        let rows = qb
            .build_query_scalar::<Json<Document>>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("list documents"))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let mut qb = count_query(collection, filter);
        let total = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("count documents"))?;
        Ok(total.max(0) as u64)
    }

    async fn find_by_ids(
        &self,
        collection: &str,
        ids: &[DocumentId],
        scope: &Filter,
    ) -> AppResult<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(|id| id.into_uuid()).collect();
        let mut qb = QueryBuilder::new("SELECT body FROM documents");
        push_where(&mut qb, collection, scope);
        qb.push(" AND id = ANY(");
        qb.push_bind(uuids);
        qb.push(")");
        let rows = qb
            .build_query_scalar::<Json<Document>>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("find documents by id"))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn merge(
        &self,
        collection: &str,
        id: DocumentId,
        scope: &Filter,
        patch: Document,
    ) -> AppResult<u64> {
        let mut qb = merge_query(collection, id, scope, patch);
        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(store_error("update document"))?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, collection: &str, id: DocumentId, scope: &Filter) -> AppResult<u64> {
        let mut qb = by_id_query("DELETE FROM documents", collection, id, scope);
        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(store_error("delete document"))?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::types::FilterField;
    use serde_json::json;

    #[test]
    fn test_tenant_predicate_uses_column() {
        let filter = Filter::for_tenant("m1").and(FilterField::eq("name", "bar"));
        let qb = count_query("sys_role_config", &filter);
        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM documents WHERE collection = $1 \
             AND merchant_id = $2 AND body #> $3 = $4"
        );
    }

    #[test]
    fn test_non_string_tenant_compares_body() {
        let filter = Filter::new().and(FilterField::eq(TENANT_FIELD, json!(7)));
        let qb = count_query("sys_role_config", &filter);
        assert!(qb.sql().ends_with("AND body #> $2 = $3"));
    }

    #[test]
    fn test_select_sorts_with_id_tie_breaker() {
        let qb = select_query(
            "sys_role_config",
            &Filter::for_tenant("m1"),
            Some(&SortField::desc("name")),
            Range::new(10, 5),
        )
        .unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT body FROM documents WHERE collection = $1 AND merchant_id = $2 \
             ORDER BY body #> $3 DESC, id ASC LIMIT $4 OFFSET $5"
        );
    }

    #[test]
    fn test_unbounded_select_has_no_limit() {
        let qb = select_query("c", &Filter::new(), None, Range::unbounded(0)).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT body FROM documents WHERE collection = $1 ORDER BY id ASC"
        );
    }

    #[test]
    fn test_window_beyond_bigint_is_rejected() {
        for range in [Range::new(1u64 << 63, 10), Range::new(0, u64::MAX)] {
            let kind = select_query("c", &Filter::new(), None, range).err().map(|e| e.kind);
            assert_eq!(kind, Some(ErrorKind::Validation));
        }
        assert!(select_query("c", &Filter::new(), None, Range::new(i64::MAX as u64, 1)).is_ok());
    }

    #[test]
    fn test_merge_is_scoped() {
        let qb = merge_query(
            "c",
            DocumentId::new(),
            &Filter::for_tenant("m1"),
            Document::new(),
        );
        assert_eq!(
            qb.sql(),
            "UPDATE documents SET body = body || $1 WHERE collection = $2 \
             AND merchant_id = $3 AND id = $4"
        );
    }
}
