//! Quiz categories repository
//!
//! Category names are not unique; creating the same name twice yields two rows.

use anyhow::Result;
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use super::sqlite_helpers::{in_placeholders, now_iso8601};

/// Category record from database
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every category in id order
    pub async fn list(&self) -> Result<Vec<CategoryRecord>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            "SELECT id, name, created_at FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get all categories whose id is in `ids` (batch lookup for loaders)
    pub async fn get_many(&self, ids: &[i64]) -> Result<Vec<CategoryRecord>> {
        let sql = format!(
            "SELECT id, name, created_at FROM categories WHERE id IN ({})",
            in_placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, CategoryRecord>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Insert a category and return the stored row
    pub async fn create(&self, name: &str) -> Result<CategoryRecord> {
        Self::insert(&self.pool, name).await
    }

    /// Insert through any executor, e.g. an open transaction
    pub async fn insert<'e>(
        executor: impl SqliteExecutor<'e>,
        name: &str,
    ) -> Result<CategoryRecord> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categories (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(now_iso8601())
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
