//! Database connection and repositories
//!
//! One repository per table family. Repositories are cheap to construct; the
//! [Database] wrapper hands them out with a clone of the pool.

pub mod books;
pub mod categories;
pub mod questions;
pub mod quizzes;
pub mod schema_sync;
pub mod seed;
pub mod sqlite_helpers;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use books::{BookRecord, BookRepository, CreateBook};
pub use categories::{CategoryRecord, CategoryRepository};
pub use questions::{
    AnswerRecord, AnswerRepository, CreateAnswer, CreateQuestion, Difficulty, QuestionRecord,
    QuestionRepository,
};
pub use quizzes::{CreateQuiz, QuizRecord, QuizRepository};
pub use seed::{SeedResult, run_seeds};
pub use users::{CreateUser, UserFilter, UserRecord, UsersRepository};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Get the maximum connection pool size from environment or default
    fn get_max_connections() -> u32 {
        std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Open a connection pool for `url` (e.g. `sqlite:./data/quizbook.db`).
    ///
    /// The database file is created if missing and foreign keys are enforced.
    /// `sqlite::memory:` gets a single pinned connection, since every SQLite
    /// connection to `:memory:` is a separate database.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(Self::get_max_connections())
                .acquire_timeout(Duration::from_secs(10))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", url))?;

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get a book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Get a category repository
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Get a quiz repository
    pub fn quizzes(&self) -> QuizRepository {
        QuizRepository::new(self.pool.clone())
    }

    /// Get a question repository
    pub fn questions(&self) -> QuestionRepository {
        QuestionRepository::new(self.pool.clone())
    }

    /// Get an answer repository
    pub fn answers(&self) -> AnswerRepository {
        AnswerRepository::new(self.pool.clone())
    }

    /// Get a users repository
    pub fn users(&self) -> UsersRepository {
        UsersRepository::new(self.pool.clone())
    }

    /// Create any missing tables and indexes, returning the tables created
    pub async fn sync_schema(&self) -> Result<Vec<String>> {
        schema_sync::sync_schema(&self.pool).await
    }

    /// Expected tables that do not exist. Doubles as a connectivity check.
    pub async fn missing_tables(&self) -> Result<Vec<String>> {
        schema_sync::missing_tables(&self.pool).await
    }
}
