//! Quizzes repository

use anyhow::Result;
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use super::sqlite_helpers::{in_placeholders, now_iso8601};

/// Quiz record from database
#[derive(Debug, Clone, FromRow)]
pub struct QuizRecord {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    pub created_at: String,
}

/// Data for creating a new quiz
#[derive(Debug, Clone)]
pub struct CreateQuiz {
    pub title: String,
    pub category_id: i64,
}

pub struct QuizRepository {
    pool: SqlitePool,
}

impl QuizRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every quiz in id order
    pub async fn list(&self) -> Result<Vec<QuizRecord>> {
        let records = sqlx::query_as::<_, QuizRecord>(
            "SELECT id, title, category_id, created_at FROM quizzes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get all quizzes whose id is in `ids` (batch lookup for loaders)
    pub async fn get_many(&self, ids: &[i64]) -> Result<Vec<QuizRecord>> {
        let sql = format!(
            "SELECT id, title, category_id, created_at FROM quizzes WHERE id IN ({})",
            in_placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, QuizRecord>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Insert a quiz. Fails if `category_id` does not reference a category.
    pub async fn create(&self, input: CreateQuiz) -> Result<QuizRecord> {
        Self::insert(&self.pool, input).await
    }

    /// Insert through any executor, e.g. an open transaction
    pub async fn insert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: CreateQuiz,
    ) -> Result<QuizRecord> {
        let record = sqlx::query_as::<_, QuizRecord>(
            r#"
            INSERT INTO quizzes (title, category_id, created_at)
            VALUES (?, ?, ?)
            RETURNING id, title, category_id, created_at
            "#,
        )
        .bind(&input.title)
        .bind(input.category_id)
        .bind(now_iso8601())
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quizzes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
