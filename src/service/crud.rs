//! Generic CRUD execution against SQLite.

use crate::error::{AppError, StorageOp};
use crate::models::Resource;
use crate::sql::{delete, insert, select_all, select_by_id, update, QueryBuf};
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All rows ordered by id.
    pub async fn list<R: Resource>(pool: &SqlitePool) -> Result<Vec<R>, AppError> {
        let q = select_all(&R::TABLE);
        tracing::debug!(sql = %q.sql, "query");
        sqlx::query_as::<_, R>(&q.sql)
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::storage(StorageOp::Read, R::NOUN, e))
    }

    /// Fetch one row by primary key. A miss is `None`, not an error.
    pub async fn read<R: Resource>(pool: &SqlitePool, id: i64) -> Result<Option<R>, AppError> {
        let q = select_by_id(&R::TABLE, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::storage(StorageOp::Read, R::NOUN, e))
    }

    /// Insert one row; the key in `record` is ignored. Returns the new id.
    pub async fn create<R: Resource>(pool: &SqlitePool, record: &R) -> Result<i64, AppError> {
        let q = insert(&R::TABLE, record.values());
        let result = Self::execute(pool, &q)
            .await
            .map_err(|e| AppError::storage(StorageOp::Create, R::NOUN, e))?;
        Ok(result.last_insert_rowid())
    }

    /// Replace every non-key column of the row with `record.id()`. Returns rows affected.
    pub async fn update<R: Resource>(pool: &SqlitePool, record: &R) -> Result<u64, AppError> {
        let q = update(&R::TABLE, record.id(), record.values());
        let result = Self::execute(pool, &q)
            .await
            .map_err(|e| AppError::storage(StorageOp::Update, R::NOUN, e))?;
        Ok(result.rows_affected())
    }

    /// Hard delete by id. Returns rows affected.
    pub async fn delete<R: Resource>(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let q = delete(&R::TABLE, id);
        let result = Self::execute(pool, &q)
            .await
            .map_err(|e| AppError::storage(StorageOp::Delete, R::NOUN, e))?;
        Ok(result.rows_affected())
    }

    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<SqliteQueryResult, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.execute(pool).await
    }
}
