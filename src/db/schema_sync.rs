//! Schema synchronization
//!
//! Creates missing tables and foreign-key indexes on startup. Statements are
//! `IF NOT EXISTS`, so re-runs are no-ops. Column renames and type changes are
//! not handled.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Table definitions in dependency order (parents before children)
const TABLES: &[(&str, &str)] = &[
    (
        "books",
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "quizzes",
        r#"
        CREATE TABLE IF NOT EXISTS quizzes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE RESTRICT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "questions",
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quiz_id INTEGER NOT NULL REFERENCES quizzes(id) ON DELETE RESTRICT,
            title TEXT NOT NULL,
            difficulty INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "answers",
        r#"
        CREATE TABLE IF NOT EXISTS answers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question_id INTEGER NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
            answer_text TEXT NOT NULL,
            is_right INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE COLLATE NOCASE,
            email TEXT NOT NULL DEFAULT '',
            password_hash TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_superuser INTEGER NOT NULL DEFAULT 0,
            date_joined TEXT NOT NULL,
            last_login TEXT
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_quizzes_category_id ON quizzes(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_questions_quiz_id ON questions(quiz_id)",
    "CREATE INDEX IF NOT EXISTS idx_answers_question_id ON answers(question_id)",
];

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Names of expected tables not present in the database, in dependency order
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for (table, _) in TABLES {
        if !table_exists(pool, table).await? {
            missing.push((*table).to_string());
        }
    }
    Ok(missing)
}

/// Create every missing table and index. Returns the names of tables created.
pub async fn sync_schema(pool: &SqlitePool) -> Result<Vec<String>> {
    let mut created = Vec::new();

    for (table, ddl) in TABLES {
        if table_exists(pool, table).await? {
            continue;
        }
        debug!(table = table, "Creating table");
        sqlx::query(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create table {}", table))?;
        created.push((*table).to_string());
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    if !created.is_empty() {
        info!(tables = ?created, "Created tables");
    }

    Ok(created)
}
