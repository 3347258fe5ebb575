pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgym_core::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Build the API router over a loaded catalog.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/catalog", get(routes::units::catalog_document))
        .route("/api/units", get(routes::units::list))
        .route("/api/units/:id", get(routes::units::get_unit))
        .route("/api/words", get(routes::words::list_all))
        .route("/api/words/search", get(routes::words::search))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
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

    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "data/catalog.json".to_string());

    tracing::info!("Loading catalog from {}...", catalog_path);
    let catalog = services::catalog::load_from_path(&catalog_path).await?;
    tracing::info!(
        "Catalog loaded: {} units, {} words",
        catalog.units().len(),
        catalog.all_words().len()
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
