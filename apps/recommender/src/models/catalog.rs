use serde::{Deserialize, Serialize};

/// A single job posting from the bundled catalog. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
}

impl CatalogRecord {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary,
        }
    }

    /// Dedup key: (title, company), case-sensitive.
    pub fn identity(&self) -> (&str, &str) {
        (self.title.as_str(), self.company.as_str())
    }
}

/// The user's job title and location plus the salary predicted for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub title: String,
    pub location: String,
    pub predicted_salary: f64,
}

impl Query {
    pub fn new(title: impl Into<String>, location: impl Into<String>, predicted_salary: f64) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            predicted_salary,
        }
    }

    /// True when `record` is the job the user just searched for:
    /// title and location both equal, ignoring case.
    pub fn is_same_job(&self, record: &CatalogRecord) -> bool {
        eq_ignore_case(&record.title, &self.title) && eq_ignore_case(&record.location, &self.location)
    }

    pub fn salary_distance(&self, record: &CatalogRecord) -> f64 {
        (record.salary - self.predicted_salary).abs()
    }
}

/// Input for a fresh prediction cycle when the user taps a displayed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A catalog record projected for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub salary_formatted: String,
}

impl Recommendation {
    pub fn seed(&self) -> QuerySeed {
        QuerySeed {
            job_title: Some(self.title.clone()),
            location: Some(self.location.clone()),
        }
    }
}

/// Case-insensitive equality matching the catalog's comparison rules.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
