//! Application state and HTTP router construction.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::graphql::{BooksSchema, GraphqlService, QuizSchema, build_books_schema, build_quiz_schema};
use crate::services::AuthService;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
    pub books_schema: BooksSchema,
    pub quiz_schema: QuizSchema,
}

impl AppState {
    /// Build both schemas over `db`
    pub fn new(config: &Config, db: Database) -> Self {
        let auth = AuthService::new(db.clone(), config.auth.clone());
        Self {
            books_schema: build_books_schema(db.clone()),
            quiz_schema: build_quiz_schema(db.clone(), auth.clone()),
            db,
            auth,
        }
    }
}

/// Build the full Axum router: GraphQL endpoints, health checks, and layers.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(crate::api::health::router())
        .merge(GraphqlService::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
