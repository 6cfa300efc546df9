//! Similarity Scorer — relevance of a catalog record to the user's query.
//!
//! `score = 40·location + 35·title + 25·salary`, each sub-score in [0, 1],
//! so the total lies in [0, 100]. Pure functions, no state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::catalog::{CatalogRecord, Query};
use crate::recommend::tables::{is_stop_word, CITY_KEYWORDS, REGIONS, TITLE_DELIMITERS};

// ────────────────────────────────────────────────────────────────────────────
// Policy constants
// ────────────────────────────────────────────────────────────────────────────

pub const LOCATION_EXACT: f64 = 1.0;
pub const LOCATION_CONTAINS: f64 = 0.85;
pub const LOCATION_SAME_CITY: f64 = 0.7;
pub const LOCATION_SAME_REGION: f64 = 0.5;
/// Never zero: a distant posting can still win on title and salary.
pub const LOCATION_OTHER: f64 = 0.1;

pub const TITLE_EXACT: f64 = 0.9;
/// Deliberately above `TITLE_EXACT`; compound titles ("Staff Accounting") rank first.
pub const TITLE_CONTAINS: f64 = 0.95;
pub const TITLE_MULTI_KEYWORD_BONUS: f64 = 0.1;

/// Used when either salary is unknown (≤ 0).
pub const SALARY_UNKNOWN: f64 = 0.3;
/// (max relative difference, sub-score), checked in order.
pub const SALARY_BANDS: &[(f64, f64)] = &[
    (0.1, 1.0),
    (0.2, 0.85),
    (0.3, 0.7),
    (0.5, 0.5),
    (0.7, 0.3),
];
pub const SALARY_FLOOR: f64 = 0.15;

/// Minimum keyword keep length is 3 characters.
const MIN_KEYWORD_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Points awarded for each sub-score at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub location: f64,
    pub title: f64,
    pub salary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 40.0,
            title: 35.0,
            salary: 25.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Combined score
// ────────────────────────────────────────────────────────────────────────────

/// Relevance of `record` to `query` with the default weights.
#[allow(dead_code)]
pub fn score(query: &Query, record: &CatalogRecord) -> f64 {
    score_with_weights(query, record, &ScoringWeights::default())
}

pub fn score_with_weights(query: &Query, record: &CatalogRecord, weights: &ScoringWeights) -> f64 {
    let location = location_score(&query.location, &record.location);
    let title = title_score(&query.title, &record.title);
    let salary = salary_similarity(query.predicted_salary, record.salary);

    weights.location * location + weights.title * title + weights.salary * salary
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

/// Location affinity; the first matching rule wins.
pub fn location_score(query_location: &str, record_location: &str) -> f64 {
    let query_lower = query_location.trim().to_lowercase();
    let record_lower = record_location.trim().to_lowercase();

    if query_lower == record_lower {
        return LOCATION_EXACT;
    }

    if record_lower.contains(&query_lower) || query_lower.contains(&record_lower) {
        return LOCATION_CONTAINS;
    }

    if let (Some(a), Some(b)) = (extract_city(&query_lower), extract_city(&record_lower)) {
        if a == b {
            return LOCATION_SAME_CITY;
        }
    }

    if same_region(&query_lower, &record_lower) {
        return LOCATION_SAME_REGION;
    }

    LOCATION_OTHER
}

/// First known city keyword contained in an already lower-cased location.
pub fn extract_city(location_lower: &str) -> Option<&'static str> {
    CITY_KEYWORDS
        .iter()
        .copied()
        .find(|city| location_lower.contains(city))
}

/// True when a single region lists a city found in each location.
pub fn same_region(a_lower: &str, b_lower: &str) -> bool {
    REGIONS.iter().any(|(_, cities)| {
        cities.iter().any(|c| a_lower.contains(c)) && cities.iter().any(|c| b_lower.contains(c))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Title
// ────────────────────────────────────────────────────────────────────────────

/// Title affinity: exact, containment, then keyword Jaccard with a bonus.
pub fn title_score(query_title: &str, record_title: &str) -> f64 {
    let query_lower = query_title.trim().to_lowercase();
    let record_lower = record_title.trim().to_lowercase();

    if query_lower == record_lower {
        return TITLE_EXACT;
    }

    if record_lower.contains(&query_lower) || query_lower.contains(&record_lower) {
        return TITLE_CONTAINS;
    }

    let query_keywords = extract_keywords(&query_lower);
    let record_keywords = extract_keywords(&record_lower);

    if query_keywords.is_empty() || record_keywords.is_empty() {
        return 0.0;
    }

    let common = query_keywords.intersection(&record_keywords).count();
    if common == 0 {
        return 0.0;
    }

    let union = query_keywords.union(&record_keywords).count();
    let jaccard = common as f64 / union as f64;
    let bonus = if common >= 2 {
        TITLE_MULTI_KEYWORD_BONUS
    } else {
        0.0
    };

    (jaccard + bonus).min(1.0)
}

/// Splits a job title into its distinctive keywords.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(TITLE_DELIMITERS)
        .map(str::trim)
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

/// Closeness of two salaries by their difference relative to their mean.
pub fn salary_similarity(a: f64, b: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 {
        return SALARY_UNKNOWN;
    }

    let percent_diff = (a - b).abs() / ((a + b) / 2.0);

    SALARY_BANDS
        .iter()
        .find(|(max_diff, _)| percent_diff <= *max_diff)
        .map(|(_, band_score)| *band_score)
        .unwrap_or(SALARY_FLOOR)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
