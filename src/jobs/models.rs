// src/jobs/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Job Search Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// One search result. Transient: lives only in the jobs store list and is
/// re-fetched on every filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: CompanyRef,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form salary string as the backend stores it ("$50,000 - $70,000").
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "salary-high")]
    SalaryHigh,
    #[serde(rename = "salary-low")]
    SalaryLow,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Newest
    }
}

/// Current filter set. Mutating any field resets pagination to page 1 and
/// clears the result list (see the store's setters).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub search_text: String,
    pub location: String,
    /// Set semantics; order is irrelevant.
    pub skills: Vec<String>,
    pub job_types: Vec<String>,
    pub experience_level: String,
    pub sort_by: SortBy,
}

// Paginated search response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    pub total_pages: u32,
}
