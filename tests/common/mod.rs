//! Shared fixtures for the integration tests

#![allow(dead_code)]

use async_graphql::{Request, Response};
use serde_json::Value;

use quizbook::app::AppState;
use quizbook::config::Config;
use quizbook::db::{Database, run_seeds};
use quizbook::services::{AuthConfig, AuthService};

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        access_token_lifetime: 300,
        bcrypt_cost: 4,
    }
}

/// Fresh in-memory database with the schema applied
pub async fn empty_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.sync_schema().await.unwrap();
    db
}

/// In-memory database holding the demo seed data
pub async fn seeded_db() -> Database {
    let db = empty_db().await;
    run_seeds(&db).await.unwrap();
    db
}

pub fn app_state(db: Database) -> AppState {
    let config = Config {
        host: None,
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        auth: auth_config(),
    };
    AppState::new(&config, db)
}

pub fn auth_service(db: &Database) -> AuthService {
    AuthService::new(db.clone(), auth_config())
}

/// Serialize a GraphQL response into its wire JSON
pub fn to_json(response: Response) -> Value {
    serde_json::to_value(&response).unwrap()
}

pub fn request(query: &str) -> Request {
    Request::new(query)
}
