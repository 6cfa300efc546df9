//! Salary Insights — home-screen lists built from mean-salary lookup data.

pub mod handlers;

use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{read_json_file, CatalogError};
use crate::models::catalog::QuerySeed;
use crate::recommend::format::format_salary_short;

/// Default length of each insights list.
pub const DEFAULT_INSIGHT_LIMIT: usize = 10;

/// Placeholder shown when a location's top job is unknown.
pub const VARIOUS_JOBS: &str = "Various Jobs";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Mean salary per job title and per location, in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupData {
    #[serde(rename = "judul_mean", default, deserialize_with = "ordered_means")]
    pub title_means: Vec<(String, f64)>,
    #[serde(rename = "lokasi_mean", default, deserialize_with = "ordered_means")]
    pub location_means: Vec<(String, f64)>,
}

/// Reads a `{name: mean}` object keeping key order (`preserve_order`).
fn ordered_means<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    map.into_iter()
        .map(|(name, value)| match value.as_f64() {
            Some(mean) => Ok((name, mean)),
            None => Err(D::Error::custom(format!(
                "mean salary for '{name}' is not a number"
            ))),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingJob {
    pub title: String,
    pub salary: f64,
    pub salary_formatted: String,
    pub seed: QuerySeed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSalaryLocation {
    pub location: String,
    pub salary: f64,
    pub salary_formatted: String,
    pub top_job_title: String,
    pub seed: QuerySeed,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

pub async fn load_lookup(path: &Path) -> Result<LookupData, CatalogError> {
    let raw = read_json_file(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Highest-paying job titles first.
pub fn trending_jobs(lookup: &LookupData, limit: usize) -> Vec<TrendingJob> {
    top_by_salary(&lookup.title_means, limit)
        .into_iter()
        .map(|(title, salary)| TrendingJob {
            seed: QuerySeed {
                job_title: Some(title.to_string()),
                location: None,
            },
            title: title.to_string(),
            salary,
            salary_formatted: format_salary_short(salary),
        })
        .collect()
}

/// Highest-paying locations first.
pub fn top_salary_locations(lookup: &LookupData, limit: usize) -> Vec<TopSalaryLocation> {
    top_by_salary(&lookup.location_means, limit)
        .into_iter()
        .map(|(location, salary)| TopSalaryLocation {
            seed: QuerySeed {
                job_title: None,
                location: Some(location.to_string()),
            },
            location: location.to_string(),
            salary,
            salary_formatted: format_salary_short(salary),
            top_job_title: VARIOUS_JOBS.to_string(),
        })
        .collect()
}

/// Entries sorted by salary descending; ties keep key order.
fn top_by_salary(means: &[(String, f64)], limit: usize) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = means.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(limit);
    entries
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> LookupData {
        serde_json::from_str(
            r#"{
                "judul_mean": {
                    "Cashier": 4500000,
                    "IT Manager": 25000000,
                    "Data Analyst": 9000000,
                    "Barista": 3900000
                },
                "lokasi_mean": {
                    "Jakarta": 9100000,
                    "Bali": 6000000,
                    "Bandung": 6000000
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_trending_jobs_sorted_by_salary() {
        let jobs = trending_jobs(&lookup(), DEFAULT_INSIGHT_LIMIT);
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["IT Manager", "Data Analyst", "Cashier", "Barista"]);
        assert_eq!(jobs[0].salary_formatted, "25.0 million-unit");
        assert_eq!(jobs[0].seed.job_title.as_deref(), Some("IT Manager"));
        assert!(jobs[0].seed.location.is_none());
    }

    #[test]
    fn test_trending_jobs_truncated() {
        assert_eq!(trending_jobs(&lookup(), 2).len(), 2);
    }

    #[test]
    fn test_top_locations_ties_keep_key_order() {
        let locations = top_salary_locations(&lookup(), DEFAULT_INSIGHT_LIMIT);
        let names: Vec<&str> = locations.iter().map(|l| l.location.as_str()).collect();
        assert_eq!(names, vec!["Jakarta", "Bali", "Bandung"]);
        assert!(locations.iter().all(|l| l.top_job_title == VARIOUS_JOBS));
        assert_eq!(locations[0].seed.location.as_deref(), Some("Jakarta"));
    }

    #[test]
    fn test_ties_keep_document_key_order_not_alphabetical() {
        let lookup: LookupData = serde_json::from_str(
            r#"{
                "judul_mean": {"Zookeeper": 5000000, "Accountant": 5000000, "Miner": 7000000},
                "lokasi_mean": {"Surabaya": 6000000, "Bali": 6000000}
            }"#,
        )
        .unwrap();

        let titles: Vec<String> = trending_jobs(&lookup, DEFAULT_INSIGHT_LIMIT)
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Miner", "Zookeeper", "Accountant"]);

        let locations: Vec<String> = top_salary_locations(&lookup, DEFAULT_INSIGHT_LIMIT)
            .into_iter()
            .map(|l| l.location)
            .collect();
        assert_eq!(locations, vec!["Surabaya", "Bali"]);
    }

    #[test]
    fn test_non_numeric_mean_rejects_lookup() {
        let parsed = serde_json::from_str::<LookupData>(r#"{"judul_mean": {"Cashier": "high"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let lookup: LookupData = serde_json::from_str("{}").unwrap();
        assert!(trending_jobs(&lookup, 10).is_empty());
        assert!(top_salary_locations(&lookup, 10).is_empty());
    }
}
