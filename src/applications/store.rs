//! Job applications store for the signed-in candidate.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{encode_query, ApiClient, ApiOutcome};
use crate::common::{Resource, StoreError};

use super::models::{ApplicationListResponse, ApplicationStats, JobApplication};

/// Fixed page size for the dashboard "recent applications" widget.
const RECENT_LIMIT: u32 = 5;

const IN_PROGRESS_STATUSES: [&str; 3] = ["pending", "reviewing", "shortlisted"];
const INTERVIEW_STATUSES: [&str; 2] = ["interview", "interviewed"];

pub struct ApplicationsStore {
    client: Arc<ApiClient>,
    applications: Resource<Vec<JobApplication>>,
    stats: ApplicationStats,
    current_page: u32,
    total_pages: u32,
    server_total: u64,
}

impl ApplicationsStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            applications: Resource::default(),
            stats: ApplicationStats::default(),
            current_page: 1,
            total_pages: 0,
            server_total: 0,
        }
    }

    pub fn applications(&self) -> &Resource<Vec<JobApplication>> {
        &self.applications
    }

    pub fn stats(&self) -> ApplicationStats {
        self.stats
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Fetches one page of the candidate's applications.
    pub async fn fetch_applications(
        &mut self,
        token: &str,
        page: u32,
        limit: u32,
    ) -> Result<(), StoreError> {
        let page = page.max(1);
        let ticket = self.applications.begin();

        let query = encode_query(&[("page", page.to_string()), ("limit", limit.to_string())]);
        let path = format!("/candidates/applications?{}", query);

        let result = self
            .client
            .get::<ApplicationListResponse>(&path, Some(token))
            .await
            .and_then(ApiOutcome::into_result);

        match result {
            Ok(response) => {
                if self.applications.resolve(ticket, Ok(response.applications)) {
                    self.current_page = page;
                    self.total_pages = response.total_pages;
                    self.server_total = response.total_applications;
                    self.recompute_stats();
                    info!(
                        page = page,
                        total = self.server_total,
                        "applications page loaded"
                    );
                }
                Ok(())
            }
            Err(e) => {
                self.applications.fail(ticket, e.clone());
                Err(e)
            }
        }
    }

    /// Fetches the fixed small slice used by dashboard widgets.
    pub async fn fetch_recent(&mut self, token: &str) -> Result<(), StoreError> {
        self.fetch_applications(token, 1, RECENT_LIMIT).await
    }

    /// Locally patches an application's status (simulated status-change
    /// notification). Statistics are recomputed wholesale afterwards.
    pub fn patch_status(&mut self, application_id: &str, status: &str) {
        let patched = {
            let list = self.applications.data_mut();
            match list.iter_mut().find(|a| a.id == application_id) {
                Some(application) => {
                    application.status = status.to_string();
                    true
                }
                None => false,
            }
        };

        if patched {
            debug!(application_id = %application_id, status = %status, "status patched locally");
            self.recompute_stats();
        }
    }

    // Recomputed on every list change to avoid drift; never incrementally
    // adjusted.
    fn recompute_stats(&mut self) {
        self.stats = derive_stats(self.applications.data(), self.server_total);
    }
}

/// Derives the three dashboard statistics from a list plus the
/// server-reported total. Status matching is case-insensitive.
pub(crate) fn derive_stats(applications: &[JobApplication], server_total: u64) -> ApplicationStats {
    let in_progress = applications
        .iter()
        .filter(|a| matches_any(&a.status, &IN_PROGRESS_STATUSES))
        .count();
    let interviews = applications
        .iter()
        .filter(|a| matches_any(&a.status, &INTERVIEW_STATUSES))
        .count();

    ApplicationStats {
        total: server_total,
        in_progress,
        interviews,
    }
}

fn matches_any(status: &str, wanted: &[&str]) -> bool {
    wanted.iter().any(|w| status.eq_ignore_ascii_case(w))
}
