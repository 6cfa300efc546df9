//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{load_with_fallback, CatalogSource};
use crate::errors::AppError;
use crate::models::catalog::{Query, QuerySeed, Recommendation};
use crate::recommend::selector::Strategy;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Prediction result plus the user input it was computed for.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub job_title: String,
    pub location: String,
    pub predicted_salary: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub seed: QuerySeed,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub request_id: Uuid,
    pub source: CatalogSource,
    pub strategy: Option<Strategy>,
    pub recommendations: Vec<RecommendationItem>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendRequest {
    fn into_query(self) -> Result<Query, AppError> {
        if self.job_title.trim().is_empty() {
            return Err(AppError::Validation("job_title cannot be empty".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::Validation("location cannot be empty".to_string()));
        }
        if !self.predicted_salary.is_finite() || self.predicted_salary < 0.0 {
            return Err(AppError::Validation(
                "predicted_salary must be a non-negative number".to_string(),
            ));
        }
        Ok(Query::new(self.job_title, self.location, self.predicted_salary))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Loads a fresh catalog snapshot (primary, else fallback) and returns up to
/// five postings similar to the predicted job.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let query = request.into_query()?;
    let request_id = Uuid::new_v4();

    let (catalog, source) =
        load_with_fallback(state.catalog.as_ref(), state.fallback_catalog.as_ref()).await?;

    let selection = state.selector.select_with_strategy(&query, &catalog);

    info!(
        %request_id,
        title = %query.title,
        location = %query.location,
        catalog_size = catalog.len(),
        ?source,
        strategy = ?selection.strategy,
        count = selection.recommendations.len(),
        "Recommendations served"
    );

    let recommendations = selection
        .recommendations
        .into_iter()
        .map(|recommendation| RecommendationItem {
            seed: recommendation.seed(),
            recommendation,
        })
        .collect();

    Ok(Json(RecommendResponse {
        request_id,
        source,
        strategy: selection.strategy,
        recommendations,
        generated_at: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, location: &str, salary: f64) -> RecommendRequest {
        RecommendRequest {
            job_title: title.to_string(),
            location: location.to_string(),
            predicted_salary: salary,
        }
    }

    #[test]
    fn test_valid_request_becomes_query() {
        let query = request("Accounting Staff", "Jakarta", 8_000_000.0)
            .into_query()
            .unwrap();
        assert_eq!(query.title, "Accounting Staff");
        assert_eq!(query.predicted_salary, 8_000_000.0);
    }

    #[test]
    fn test_zero_salary_is_allowed() {
        assert!(request("Cashier", "Bali", 0.0).into_query().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(matches!(
            request("   ", "Jakarta", 1.0).into_query(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_location_rejected() {
        assert!(matches!(
            request("Cashier", "", 1.0).into_query(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_salary_rejected() {
        assert!(matches!(
            request("Cashier", "Bali", -5.0).into_query(),
            Err(AppError::Validation(_))
        ));
    }
}
