//! Application configuration management

use std::env;

use anyhow::{Context, Result};

use crate::services::auth::AuthConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// SQLite connection URL, e.g. `sqlite:./data/quizbook.db`
    pub database_url: String,

    /// Token signing and password hashing settings
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Prefer DATABASE_PATH, fall back to DATABASE_URL
        let database_url = env::var("DATABASE_PATH")
            .map(|path| format!("sqlite:{}", path))
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "sqlite:./data/quizbook.db".to_string());

        Ok(Self {
            host: env::var("HOST").ok(),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid PORT")?,

            database_url,

            auth: AuthConfig::from_env(),
        })
    }

    /// Base URL used when logging endpoint locations
    pub fn base_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.host.as_deref().unwrap_or("localhost"),
            self.port
        )
    }
}
