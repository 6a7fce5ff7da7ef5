//! HTTP routes for the two GraphQL endpoints.
//!
//! POST executes a query; GET serves the GraphiQL console to browsers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::app::AppState;

use super::{extract_token, verify_token};

pub const BOOKS_ENDPOINT: &str = "/books/";
pub const QUIZ_ENDPOINT: &str = "/quiz/";

/// Route builder for the GraphQL endpoints
pub struct GraphqlService;

impl GraphqlService {
    /// Return a router with both endpoints. Merge this into the app and call
    /// `.with_state(state)` on the combined router.
    pub fn router() -> Router<AppState> {
        Router::new()
            .route(BOOKS_ENDPOINT, get(books_graphiql).post(books_handler))
            .route(QUIZ_ENDPOINT, get(quiz_graphiql).post(quiz_handler))
    }
}

fn graphiql(headers: &HeaderMap, endpoint: &str) -> Response {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(GraphiQLSource::build().endpoint(endpoint).finish()).into_response()
    } else {
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

async fn books_graphiql(headers: HeaderMap) -> Response {
    graphiql(&headers, BOOKS_ENDPOINT)
}

async fn quiz_graphiql(headers: HeaderMap) -> Response {
    graphiql(&headers, QUIZ_ENDPOINT)
}

async fn books_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.books_schema.execute(req.into_inner()).await.into()
}

async fn quiz_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(token) = extract_token(&headers) {
        match verify_token(&state.auth, &token) {
            Ok(user) => {
                tracing::debug!(user_id = user.user_id, "Auth successful");
                request = request.data(user);
            }
            Err(e) => {
                // Invalid tokens fall through as anonymous requests
                tracing::debug!(error = %e, "Token verification failed");
            }
        }
    }
    state.quiz_schema.execute(request).await.into()
}
