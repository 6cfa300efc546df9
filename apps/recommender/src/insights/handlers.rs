//! Axum route handlers for the Insights API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::insights::{
    load_lookup, top_salary_locations, trending_jobs, TopSalaryLocation, TrendingJob,
    DEFAULT_INSIGHT_LIMIT,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InsightsParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub trending_jobs: Vec<TrendingJob>,
    pub top_salary_locations: Vec<TopSalaryLocation>,
}

/// GET /api/v1/insights
pub async fn handle_insights(
    State(state): State<AppState>,
    Query(params): Query<InsightsParams>,
) -> Result<Json<InsightsResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_INSIGHT_LIMIT);
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let lookup = load_lookup(&state.lookup_data_path).await?;
    debug!(
        titles = lookup.title_means.len(),
        locations = lookup.location_means.len(),
        "Lookup data loaded"
    );

    Ok(Json(InsightsResponse {
        trending_jobs: trending_jobs(&lookup, limit),
        top_salary_locations: top_salary_locations(&lookup, limit),
    }))
}
