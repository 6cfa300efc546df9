pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::insights::handlers as insights;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            post(recommend::handle_recommend),
        )
        .route("/api/v1/insights", get(insights::handle_insights))
        .fallback(not_found)
        .with_state(state)
}
