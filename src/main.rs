//! Quizbook backend
//!
//! Serves the books and quiz GraphQL APIs over a SQLite store.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizbook::app::{AppState, build_app};
use quizbook::cli::CliOptions;
use quizbook::config::Config;
use quizbook::db::{Database, run_seeds};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliOptions::from_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting Quizbook backend");

    let mut config = Config::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    tracing::info!("Configuration loaded");

    let db = Database::connect(&config.database_url).await?;
    db.sync_schema().await?;
    tracing::info!("Database connected");

    if cli.seed {
        let seeded = run_seeds(&db).await?;
        if seeded.is_empty() {
            tracing::info!("Database already has content, skipping seed");
        } else {
            tracing::info!(?seeded, "Seeded demo content");
        }
    }

    let state = AppState::new(&config, db.clone());
    tracing::info!("GraphQL schemas built");

    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!("Books API: {}/books/", config.base_url());
    tracing::info!("Quiz API: {}/quiz/", config.base_url());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    db.close().await;
    Ok(())
}
