mod catalog;
mod config;
mod errors;
mod insights;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JsonFileCatalog;
use crate::config::Config;
use crate::recommend::selector::Selector;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recommender v{}", env!("CARGO_PKG_VERSION"));

    // Catalogs are read per request; only the paths are fixed here
    let catalog = Arc::new(JsonFileCatalog::new(&config.catalog_path));
    let fallback_catalog = Arc::new(JsonFileCatalog::new(&config.fallback_catalog_path));
    info!(
        "Catalog: {} (fallback: {})",
        catalog.path().display(),
        fallback_catalog.path().display()
    );

    let selector = Selector::default();
    info!(
        "Scoring weights: {:?}, limit {}",
        selector.weights, selector.limit
    );

    // Build app state
    let state = AppState {
        catalog,
        fallback_catalog,
        selector,
        lookup_data_path: config.lookup_data_path.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
