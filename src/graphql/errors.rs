//! Resolver error kinds and their GraphQL error codes

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity} matching id {id} does not exist")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ApiError::NotFound { entity, id }
    }

    /// Wrap a repository failure, logging it once here
    pub fn store(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        ApiError::Store(err.to_string())
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Store(_) => "STORE_ERROR",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
