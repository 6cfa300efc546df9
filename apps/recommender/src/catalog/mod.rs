//! Catalog Store — loads job catalog snapshots from bundled JSON files.
//!
//! Default: `JsonFileCatalog` (re-read from disk on every call, no caching).
//! `AppState` holds a primary and a fallback `Arc<dyn CatalogStore>`;
//! `load_with_fallback` picks whichever loads first.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::catalog::CatalogRecord;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No catalog available: {0}")]
    Unavailable(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A source of catalog snapshots. Implementations own loading; the selector
/// only ever sees the returned records.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Which store served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Primary,
    Fallback,
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileCatalog
// ────────────────────────────────────────────────────────────────────────────

pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogStore for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        let raw = read_json_file(&self.path).await?;
        let records = parse_catalog(&raw)?;
        info!(
            path = %self.path.display(),
            total = records.len(),
            "Catalog loaded"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryCatalog
// ────────────────────────────────────────────────────────────────────────────

/// A fixed snapshot held in memory.
#[allow(dead_code)]
pub struct InMemoryCatalog(pub Vec<CatalogRecord>);

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.0.len())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Loading and parsing
// ────────────────────────────────────────────────────────────────────────────

/// Loads the primary catalog, falling back to the secondary dataset on failure.
pub async fn load_with_fallback(
    primary: &dyn CatalogStore,
    fallback: &dyn CatalogStore,
) -> Result<(Vec<CatalogRecord>, CatalogSource), CatalogError> {
    let primary_err = match primary.load().await {
        Ok(records) => return Ok((records, CatalogSource::Primary)),
        Err(e) => e,
    };

    warn!(
        store = %primary.describe(),
        error = %primary_err,
        "Primary catalog unavailable, using fallback"
    );

    match fallback.load().await {
        Ok(records) => Ok((records, CatalogSource::Fallback)),
        Err(fallback_err) => Err(CatalogError::Unavailable(format!(
            "primary {}: {primary_err}; fallback {}: {fallback_err}",
            primary.describe(),
            fallback.describe()
        ))),
    }
}

pub(crate) async fn read_json_file(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// A catalog file: `jobs`, or the home-screen `top_salary_locations` list.
/// When both are present `jobs` wins.
#[derive(Deserialize)]
struct CatalogDocument {
    jobs: Option<Vec<Value>>,
    top_salary_locations: Option<Vec<Value>>,
}

impl CatalogDocument {
    fn into_records(self) -> Result<Vec<Value>, serde_json::Error> {
        self.jobs
            .or(self.top_salary_locations)
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("jobs"))
    }
}

/// Record shapes accepted in a catalog document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Job {
        title: String,
        company: String,
        location: String,
        salary: f64,
    },
    /// Home-screen dataset entry.
    #[serde(rename_all = "camelCase")]
    TopLocation {
        top_job_title: String,
        company: String,
        location: String,
        top_job_salary: f64,
    },
}

impl From<RawRecord> for CatalogRecord {
    fn from(raw: RawRecord) -> Self {
        match raw {
            RawRecord::Job {
                title,
                company,
                location,
                salary,
            } => CatalogRecord::new(title, company, location, salary),
            RawRecord::TopLocation {
                top_job_title,
                company,
                location,
                top_job_salary,
            } => CatalogRecord::new(top_job_title, company, location, top_job_salary),
        }
    }
}

/// Parses a catalog document. A broken document is an error; a broken record
/// is skipped.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    let values = document.into_records()?;
    let total = values.len();

    let records: Vec<CatalogRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawRecord>(value) {
            Ok(raw) => {
                let record = CatalogRecord::from(raw);
                if record.salary.is_finite() {
                    Some(record)
                } else {
                    warn!(index, "Dropping catalog record with non-finite salary");
                    None
                }
            }
            Err(e) => {
                warn!(index, error = %e, "Dropping malformed catalog record");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(
            dropped = total - records.len(),
            kept = records.len(),
            "Catalog contained malformed records"
        );
    }

    Ok(records)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"{
        "jobs": [
            {"title": "Accounting Staff", "company": "PT A", "location": "Jakarta", "salary": 8000000},
            {"title": "Data Analyst", "company": "PT B", "location": "Bandung", "salary": 9500000.5},
            {"title": "Missing Company", "location": "Bandung", "salary": 1},
            {"title": "Bad Salary", "company": "PT C", "location": "Bandung", "salary": "lots"},
            "not even an object"
        ]
    }"#;

    const HOME_DATA_JSON: &str = r#"{
        "top_salary_locations": [
            {"location": "Jakarta", "salary": 9100000, "topJobTitle": "IT Manager", "company": "PT X", "topJobSalary": 25000000},
            {"location": "Bali", "salary": 6000000, "topJobTitle": "Hotel Manager", "company": "PT Y", "topJobSalary": 18000000}
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_drops_malformed_records() {
        let records = parse_catalog(CATALOG_JSON).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Accounting Staff");
        assert_eq!(records[0].salary, 8_000_000.0);
        assert_eq!(records[1].company, "PT B");
    }

    #[test]
    fn test_parse_accepts_home_data_shape() {
        let records = parse_catalog(HOME_DATA_JSON).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "IT Manager");
        assert_eq!(records[0].salary, 25_000_000.0);
        assert_eq!(records[1].location, "Bali");
    }

    #[test]
    fn test_parse_rejects_document_without_jobs() {
        assert!(matches!(
            parse_catalog(r#"{"items": []}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn test_parse_prefers_jobs_when_both_lists_present() {
        let records = parse_catalog(
            r#"{
                "top_salary_locations": [
                    {"location": "Bali", "topJobTitle": "Hotel Manager", "company": "PT Y", "topJobSalary": 18000000}
                ],
                "jobs": [
                    {"title": "Accounting Staff", "company": "PT A", "location": "Jakarta", "salary": 8000000}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Accounting Staff");
    }

    #[test]
    fn test_parse_empty_catalog() {
        assert!(parse_catalog(r#"{"jobs": []}"#).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_file_catalog_loads_from_disk() {
        let file = write_temp(CATALOG_JSON);
        let store = JsonFileCatalog::new(file.path());
        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let store = JsonFileCatalog::new("/definitely/not/here/jobs.json");
        assert!(matches!(store.load().await, Err(CatalogError::Io { .. })));
    }

    #[tokio::test]
    async fn test_primary_wins_when_available() {
        let primary = InMemoryCatalog(vec![CatalogRecord::new("A", "B", "C", 1.0)]);
        let fallback = InMemoryCatalog(vec![]);
        let (records, source) = load_with_fallback(&primary, &fallback).await.unwrap();
        assert_eq!(source, CatalogSource::Primary);
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_missing() {
        let home = write_temp(HOME_DATA_JSON);
        let primary = JsonFileCatalog::new("/definitely/not/here/jobs.json");
        let fallback = JsonFileCatalog::new(home.path());

        let (records, source) = load_with_fallback(&primary, &fallback).await.unwrap();
        assert_eq!(source, CatalogSource::Fallback);
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_unparseable() {
        let broken = write_temp("{ broken");
        let primary = JsonFileCatalog::new(broken.path());
        let fallback = InMemoryCatalog(vec![CatalogRecord::new("A", "B", "C", 1.0)]);

        let (_, source) = load_with_fallback(&primary, &fallback).await.unwrap();
        assert_eq!(source, CatalogSource::Fallback);
    }

    #[tokio::test]
    async fn test_both_sources_failing_is_unavailable() {
        let primary = JsonFileCatalog::new("/nope/a.json");
        let fallback = JsonFileCatalog::new("/nope/b.json");
        let err = load_with_fallback(&primary, &fallback).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
        assert!(err.to_string().contains("/nope/b.json"));
    }
}
