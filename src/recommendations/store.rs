//! Recommended jobs store: a server-ranked suggestion list with local-only
//! mutations (dismiss, applied flag). Nothing here writes back to the server;
//! the actual application submission is a separate flow.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{encode_query, ApiClient, ApiOutcome};
use crate::common::{Resource, StoreError};

use super::models::{RecommendationsResponse, RecommendedJob};

const DEFAULT_LIMIT: u32 = 6;
const REFRESH_LIMIT: u32 = 12;

pub struct RecommendationsStore {
    client: Arc<ApiClient>,
    recommended: Resource<Vec<RecommendedJob>>,
    total: u64,
}

impl RecommendationsStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            recommended: Resource::default(),
            total: 0,
        }
    }

    pub fn recommended(&self) -> &Resource<Vec<RecommendedJob>> {
        &self.recommended
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub async fn fetch(&mut self, token: &str) -> Result<(), StoreError> {
        self.fetch_with_limit(token, DEFAULT_LIMIT).await
    }

    /// Functionally identical to `fetch` at a larger page size; exists so a
    /// user-triggered refresh is distinguishable in the logs.
    pub async fn refresh(&mut self, token: &str) -> Result<(), StoreError> {
        info!(user_triggered = true, "refreshing recommendations");
        self.fetch_with_limit(token, REFRESH_LIMIT).await
    }

    async fn fetch_with_limit(&mut self, token: &str, limit: u32) -> Result<(), StoreError> {
        let ticket = self.recommended.begin();

        let query = encode_query(&[("limit", limit.to_string())]);
        let path = format!("/candidates/recommended-jobs?{}", query);

        let result = self
            .client
            .get::<RecommendationsResponse>(&path, Some(token))
            .await
            .and_then(ApiOutcome::into_result);

        match result {
            Ok(response) => {
                // Server order is matchScore descending; keep it as-is.
                if self.recommended.resolve(ticket, Ok(response.jobs)) {
                    self.total = response.total;
                    debug!(
                        count = self.recommended.data().len(),
                        total = self.total,
                        "recommendations loaded"
                    );
                }
                Ok(())
            }
            Err(e) => {
                self.recommended.fail(ticket, e.clone());
                Err(e)
            }
        }
    }

    /// Dismisses a recommendation locally. The total is decremented with a
    /// floor of 0; an unknown id leaves both list and total unchanged.
    pub fn remove(&mut self, job_id: &str) {
        let list = self.recommended.data_mut();
        let before = list.len();
        list.retain(|job| job.id != job_id);

        if list.len() < before {
            self.total = self.total.saturating_sub(1);
            debug!(job_id = %job_id, total = self.total, "recommendation dismissed");
        }
    }

    /// Flags a recommendation as applied-to, for immediate UI feedback only.
    /// The flag is not persisted and is lost on refresh.
    pub fn mark_applied(&mut self, job_id: &str) {
        if let Some(job) = self
            .recommended
            .data_mut()
            .iter_mut()
            .find(|job| job.id == job_id)
        {
            job.applied = true;
        }
    }
}
