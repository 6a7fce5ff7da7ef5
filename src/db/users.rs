//! Users repository for authentication
//!
//! Usernames are unique and compared case-insensitively.

use anyhow::Result;
use sqlx::{FromRow, SqlitePool};

use super::sqlite_helpers::now_iso8601;

// ============================================================================
// User Records
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub date_joined: String,
    pub last_login: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_superuser: bool,
}

/// Optional exact-match filters for [UsersRepository::list]; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, is_active, is_superuser, date_joined, last_login";

// ============================================================================
// Repository
// ============================================================================

pub struct UsersRepository {
    pool: SqlitePool,
}

impl UsersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, user: CreateUser) -> Result<UserRecord> {
        let sql = format!(
            r#"
            INSERT INTO users (username, email, password_hash, is_active, is_superuser, date_joined)
            VALUES (?, ?, ?, 1, ?, ?)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_superuser)
            .bind(now_iso8601())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Get user by username (case-insensitive)
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let sql = format!(
            "SELECT {} FROM users WHERE username = ? COLLATE NOCASE",
            USER_COLUMNS
        );
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// List users matching every set filter, in id order
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<UserRecord>> {
        let mut conditions = Vec::new();
        if filter.username.is_some() {
            conditions.push("username = ? COLLATE NOCASE");
        }
        if filter.email.is_some() {
            conditions.push("email = ?");
        }
        if filter.is_active.is_some() {
            conditions.push("is_active = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT {} FROM users {} ORDER BY id",
            USER_COLUMNS, where_clause
        );

        let mut query = sqlx::query_as::<_, UserRecord>(&sql);
        if let Some(username) = &filter.username {
            query = query.bind(username);
        }
        if let Some(email) = &filter.email {
            query = query.bind(email);
        }
        if let Some(is_active) = filter.is_active {
            query = query.bind(is_active);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Stamp the last successful login
    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(now_iso8601())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Enable or disable an account
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
