//! Recommendation Selector — picks the top postings for a query.
//!
//! Strategies run in order until one returns something:
//! 1. `Scored`: relevance score, descending
//! 2. `SameLocation`: same location, closest salary first
//! 3. `ClosestSalary`: anywhere, closest salary first
//!
//! Every strategy drops the same-job record and returns records unique by
//! (title, company).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::catalog::{eq_ignore_case, CatalogRecord, Query, Recommendation};
use crate::recommend::format::format_salary_short;
use crate::recommend::scorer::{score_with_weights, ScoringWeights};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A catalog record paired with its relevance score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub record: &'a CatalogRecord,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Scored,
    SameLocation,
    ClosestSalary,
}

/// Cascade order.
pub const STRATEGIES: &[Strategy] = &[
    Strategy::Scored,
    Strategy::SameLocation,
    Strategy::ClosestSalary,
];

/// Selector output. `strategy` is `None` when every strategy came up empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub strategy: Option<Strategy>,
    pub recommendations: Vec<Recommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Selector
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Selector {
    pub weights: ScoringWeights,
    pub limit: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            limit: MAX_RECOMMENDATIONS,
        }
    }
}

impl Selector {
    #[allow(dead_code)]
    pub fn new(weights: ScoringWeights, limit: usize) -> Self {
        Self { weights, limit }
    }

    /// Runs the cascade and reports which strategy produced the result.
    pub fn select_with_strategy(&self, query: &Query, catalog: &[CatalogRecord]) -> Selection {
        for &strategy in STRATEGIES {
            let picked = self.apply(strategy, query, catalog);
            if picked.is_empty() {
                debug!(?strategy, "Strategy returned nothing, trying next");
                continue;
            }

            let recommendations: Vec<Recommendation> =
                picked.into_iter().map(to_recommendation).collect();
            debug!(
                ?strategy,
                count = recommendations.len(),
                "Selected recommendations"
            );
            return Selection {
                strategy: Some(strategy),
                recommendations,
            };
        }

        Selection {
            strategy: None,
            recommendations: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn select(&self, query: &Query, catalog: &[CatalogRecord]) -> Vec<Recommendation> {
        self.select_with_strategy(query, catalog).recommendations
    }

    /// Runs a single strategy and returns the chosen records in display order.
    pub fn apply<'a>(
        &self,
        strategy: Strategy,
        query: &Query,
        catalog: &'a [CatalogRecord],
    ) -> Vec<&'a CatalogRecord> {
        match strategy {
            Strategy::Scored => {
                let ranked = rank_by_score(query, catalog, &self.weights);
                for candidate in &ranked {
                    debug!(
                        title = %candidate.record.title,
                        company = %candidate.record.company,
                        location = %candidate.record.location,
                        score = candidate.score,
                        "Scored candidate"
                    );
                }
                dedup_take(ranked.into_iter().map(|c| c.record), self.limit)
            }
            Strategy::SameLocation => {
                let same_location: Vec<&CatalogRecord> = candidates(query, catalog)
                    .into_iter()
                    .filter(|r| eq_ignore_case(&r.location, &query.location))
                    .collect();
                dedup_take(by_salary_distance(query, same_location), self.limit)
            }
            Strategy::ClosestSalary => {
                dedup_take(by_salary_distance(query, candidates(query, catalog)), self.limit)
            }
        }
    }
}

/// Top recommendations for `query` with the default policy.
#[allow(dead_code)]
pub fn select(query: &Query, catalog: &[CatalogRecord]) -> Vec<Recommendation> {
    Selector::default().select(query, catalog)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Catalog minus the same-job record, in catalog order.
fn candidates<'a>(query: &Query, catalog: &'a [CatalogRecord]) -> Vec<&'a CatalogRecord> {
    catalog.iter().filter(|r| !query.is_same_job(r)).collect()
}

/// Positive-scoring candidates, best first. Ties keep catalog order.
pub fn rank_by_score<'a>(
    query: &Query,
    catalog: &'a [CatalogRecord],
    weights: &ScoringWeights,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates(query, catalog)
        .into_iter()
        .map(|record| ScoredCandidate {
            record,
            score: score_with_weights(query, record, weights),
        })
        .filter(|c| c.score > 0.0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Closest salary first. Ties keep catalog order.
fn by_salary_distance<'a>(
    query: &Query,
    mut records: Vec<&'a CatalogRecord>,
) -> Vec<&'a CatalogRecord> {
    records.sort_by(|a, b| query.salary_distance(a).total_cmp(&query.salary_distance(b)));
    records
}

/// Keeps the first record per (title, company) and stops at `limit`.
fn dedup_take<'a>(
    records: impl IntoIterator<Item = &'a CatalogRecord>,
    limit: usize,
) -> Vec<&'a CatalogRecord> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut picked = Vec::new();
    for record in records {
        if picked.len() == limit {
            break;
        }
        if seen.insert(record.identity()) {
            picked.push(record);
        }
    }
    picked
}

fn to_recommendation(record: &CatalogRecord) -> Recommendation {
    Recommendation {
        title: record.title.clone(),
        company: record.company.clone(),
        location: record.location.clone(),
        salary: record.salary,
        salary_formatted: format_salary_short(record.salary),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
