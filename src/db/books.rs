//! Books repository

use anyhow::Result;
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use super::sqlite_helpers::now_iso8601;

/// Book record from database
#[derive(Debug, Clone, FromRow)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub created_at: String,
}

/// Data for creating a new book
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub summary: String,
}

pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every book in id order
    pub async fn list(&self) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(
            "SELECT id, title, summary, created_at FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Insert a book and return the stored row. Accepts a pool or an open transaction.
    pub async fn insert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: CreateBook,
    ) -> Result<BookRecord> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            INSERT INTO books (title, summary, created_at)
            VALUES (?, ?, ?)
            RETURNING id, title, summary, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.summary)
        .bind(now_iso8601())
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
