// src/recommendations/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jobs::models::CompanyRef;

// ============================================================================
// Recommendation Models
// ============================================================================

/// A server-ranked job suggestion. The list arrives sorted by `match_score`
/// descending and the client never re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    pub id: String,
    pub title: String,
    pub company: CompanyRef,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// 0-100 rank computed server-side.
    pub match_score: u32,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Client-only UI feedback flag. Never serialized, so it cannot be
    /// persisted or sent back to the server; a refresh drops it.
    #[serde(skip)]
    pub applied: bool,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsResponse {
    pub jobs: Vec<RecommendedJob>,
    pub total: u64,
}
