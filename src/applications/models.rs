// src/applications/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Application Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCompany {
    pub name: String,
}

/// Job reference embedded in an application; only what the list views need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationJobRef {
    pub id: String,
    pub title: String,
    pub company: ApplicationCompany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job: ApplicationJobRef,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Derived statistics. Always recomputed from the full in-memory list plus
/// the server-reported total, never incrementally patched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    /// Server-reported total, not the local list length.
    pub total: u64,
    /// Applications with status pending, reviewing, or shortlisted.
    pub in_progress: usize,
    /// Applications with status interview or interviewed.
    pub interviews: usize,
}

// Paginated list response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    pub applications: Vec<JobApplication>,
    pub total_applications: u64,
    pub total_pages: u32,
}

/// Submission payload produced by the application wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub resume_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}
