//! Liveness and readiness endpoints
//!
//! `/readyz` answers 503 until the database is reachable and every table the
//! schemas read from exists.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub database: bool,
    pub missing_tables: Vec<String>,
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (database, missing_tables) = match state.db.missing_tables().await {
        Ok(missing) => (true, missing),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check could not reach the database");
            (false, Vec::new())
        }
    };

    if !missing_tables.is_empty() {
        tracing::warn!(tables = ?missing_tables, "Readiness check found missing tables");
    }

    let ready = database && missing_tables.is_empty();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(Readiness {
            ready,
            database,
            missing_tables,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(liveness))
        .route("/readyz", get(readiness))
}
