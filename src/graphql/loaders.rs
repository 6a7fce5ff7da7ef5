//! GraphQL DataLoaders for belongs-to relations
//!
//! `allQuestions { quiz { category { name } } }` would otherwise issue one
//! query per row and level. Each loader collects the foreign keys requested in
//! the same tick and fetches them with a single `WHERE id IN (...)`.
//!
//! Loaders are created without a cache, so sharing them across requests
//! through schema data never serves stale rows.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::db::{CategoryRecord, Database, QuestionRecord, QuizRecord};

/// Batches `categories` lookups by id
pub struct CategoryLoader {
    db: Database,
}

impl CategoryLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for CategoryLoader {
    type Value = CategoryRecord;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        tracing::debug!(count = keys.len(), "Batch loading categories");
        let records = self.db.categories().get_many(keys).await.map_err(Arc::new)?;
        Ok(records.into_iter().map(|r| (r.id, r)).collect())
    }
}

/// Batches `quizzes` lookups by id
pub struct QuizLoader {
    db: Database,
}

impl QuizLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for QuizLoader {
    type Value = QuizRecord;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        tracing::debug!(count = keys.len(), "Batch loading quizzes");
        let records = self.db.quizzes().get_many(keys).await.map_err(Arc::new)?;
        Ok(records.into_iter().map(|r| (r.id, r)).collect())
    }
}

/// Batches `questions` lookups by id
pub struct QuestionLoader {
    db: Database,
}

impl QuestionLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for QuestionLoader {
    type Value = QuestionRecord;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        tracing::debug!(count = keys.len(), "Batch loading questions");
        let records = self.db.questions().get_many(keys).await.map_err(Arc::new)?;
        Ok(records.into_iter().map(|r| (r.id, r)).collect())
    }
}
