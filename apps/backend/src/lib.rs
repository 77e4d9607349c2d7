pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::ProgressStore;
use crate::services::clock::{Clock, SystemClock};
use crate::services::riddles::{CatalogProvider, RiddleProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProgressStore>,
    pub riddles: Arc<dyn RiddleProvider>,
    pub clock: Arc<dyn Clock>,
    pub calendar_year: i32,
}

/// Build the API router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/calendar", get(routes::calendar::get))
        .route("/api/progress", get(routes::progress::list))
        .route("/api/doors/{day}", get(routes::doors::open))
        .route("/api/doors/{day}/hints", post(routes::doors::reveal_hint))
        .route("/api/doors/{day}/answer", post(routes::doors::answer))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading riddles...");
    let riddles = CatalogProvider::load(&config.riddles_file).await?;

    let store = match &config.progress_file {
        Some(path) => ProgressStore::open(path.clone()).await?,
        None => {
            tracing::info!("PROGRESS_FILE not set, keeping progress in memory");
            ProgressStore::in_memory()
        }
    };

    let state = AppState {
        store: Arc::new(store),
        riddles: Arc::new(riddles),
        clock: Arc::new(SystemClock),
        calendar_year: config.calendar_year,
    };

    let app = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!(
        "Starting advent calendar {} on {}",
        config.calendar_year,
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
