//! Employer dashboard store.
//!
//! Aggregates three independent resources (stats, job postings, applications
//! against those postings) that can each fail on their own, plus the job CRUD
//! and application-status mutations. Mutations are strictly
//! refetch-then-render: the backend call is followed by a full reload of the
//! affected list (and stats where counts can change), never by client-side
//! list surgery. The separate optimistic patch actions mutate only in-memory
//! state and are overwritten by the next real fetch.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::{ApiClient, ApiOutcome};
use crate::common::{Resource, StoreError, Validator};

use super::models::{
    CreateJobRequest, DashboardStats, EmployerApplication, EmployerApplicationsResponse,
    EmployerJob, EmployerJobsResponse, UpdateJobRequest,
};
use super::validators::{ApplicationStatusValidator, JobPostingValidator};

pub struct EmployerStore {
    client: Arc<ApiClient>,
    stats: Resource<DashboardStats>,
    jobs: Resource<Vec<EmployerJob>>,
    applications: Resource<Vec<EmployerApplication>>,
    mutating: bool,
    mutation_error: Option<StoreError>,
}

impl EmployerStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            stats: Resource::default(),
            jobs: Resource::default(),
            applications: Resource::default(),
            mutating: false,
            mutation_error: None,
        }
    }

    pub fn stats(&self) -> &Resource<DashboardStats> {
        &self.stats
    }

    pub fn jobs(&self) -> &Resource<Vec<EmployerJob>> {
        &self.jobs
    }

    pub fn applications(&self) -> &Resource<Vec<EmployerApplication>> {
        &self.applications
    }

    pub fn mutating(&self) -> bool {
        self.mutating
    }

    pub fn mutation_error(&self) -> Option<&StoreError> {
        self.mutation_error.as_ref()
    }

    // ========================================================================
    // Aggregate Load
    // ========================================================================

    /// Fetches stats, jobs, and applications concurrently and waits for all
    /// three to settle. Partial data is acceptable: the aggregate operation
    /// fails only when all three fetches fail, in which case the error
    /// carries the three messages. Individual failures stay parked on the
    /// failed resource(s) for inline display.
    pub async fn load_all(&mut self, token: &str) -> Result<(), StoreError> {
        let stats_ticket = self.stats.begin();
        let jobs_ticket = self.jobs.begin();
        let applications_ticket = self.applications.begin();

        let client = Arc::clone(&self.client);
        let (stats_result, jobs_result, applications_result) = futures::join!(
            fetch_stats(&client, token),
            fetch_jobs(&client, token),
            fetch_applications(&client, token),
        );

        let mut failures: Vec<StoreError> = Vec::new();
        if let Err(e) = &stats_result {
            failures.push(e.clone());
        }
        if let Err(e) = &jobs_result {
            failures.push(e.clone());
        }
        if let Err(e) = &applications_result {
            failures.push(e.clone());
        }

        self.stats.resolve(stats_ticket, stats_result);
        self.jobs.resolve(jobs_ticket, jobs_result);
        self.applications
            .resolve(applications_ticket, applications_result);

        if failures.len() == 3 {
            let message = failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(" ");
            warn!(error = %message, "employer dashboard load failed entirely");
            Err(aggregate_failure(&failures[0], message))
        } else {
            info!("employer dashboard loaded");
            Ok(())
        }
    }

    // ========================================================================
    // Job Mutations
    // ========================================================================

    pub async fn create_job(
        &mut self,
        token: &str,
        request: CreateJobRequest,
    ) -> Result<(), StoreError> {
        let validation = JobPostingValidator.validate(&request);
        if !validation.is_valid {
            let error = StoreError::from(validation);
            self.mutation_error = Some(error.clone());
            return Err(error);
        }

        self.run_mutation(
            token,
            MutationKind::Post {
                path: "/companies/jobs".to_string(),
                body: request.to_body(),
            },
            Refetch::JobsAndStats,
        )
        .await
    }

    pub async fn update_job(
        &mut self,
        token: &str,
        job_id: &str,
        request: UpdateJobRequest,
    ) -> Result<(), StoreError> {
        self.run_mutation(
            token,
            MutationKind::Put {
                path: format!("/companies/jobs/{}", job_id),
                body: request.to_body(),
            },
            Refetch::Jobs,
        )
        .await
    }

    pub async fn delete_job(&mut self, token: &str, job_id: &str) -> Result<(), StoreError> {
        self.run_mutation(
            token,
            MutationKind::Delete {
                path: format!("/companies/jobs/{}", job_id),
            },
            Refetch::JobsAndStats,
        )
        .await
    }

    pub async fn update_application_status(
        &mut self,
        token: &str,
        application_id: &str,
        status: &str,
    ) -> Result<(), StoreError> {
        let validation = ApplicationStatusValidator.validate(&status.to_string());
        if !validation.is_valid {
            let error = StoreError::from(validation);
            self.mutation_error = Some(error.clone());
            return Err(error);
        }

        self.run_mutation(
            token,
            MutationKind::Put {
                path: format!("/companies/applications/{}/status", application_id),
                body: json!({ "status": status }),
            },
            Refetch::ApplicationsAndStats,
        )
        .await
    }

    async fn run_mutation(
        &mut self,
        token: &str,
        kind: MutationKind,
        refetch: Refetch,
    ) -> Result<(), StoreError> {
        self.mutating = true;
        self.mutation_error = None;

        let result = match &kind {
            MutationKind::Post { path, body } => {
                self.client
                    .post::<Value>(path, Some(token), body.clone())
                    .await
            }
            MutationKind::Put { path, body } => {
                self.client
                    .put::<Value>(path, Some(token), body.clone())
                    .await
            }
            MutationKind::Delete { path } => self.client.delete::<Value>(path, Some(token)).await,
        }
        .and_then(ApiOutcome::into_result)
        .map(|_| ());

        self.mutating = false;

        match result {
            Ok(()) => {
                info!(refetch = ?refetch, "mutation committed, reloading affected resources");
                match refetch {
                    Refetch::Jobs => {
                        self.refresh_jobs(token).await;
                    }
                    Refetch::JobsAndStats => {
                        self.refresh_jobs(token).await;
                        self.refresh_stats(token).await;
                    }
                    Refetch::ApplicationsAndStats => {
                        self.refresh_applications(token).await;
                        self.refresh_stats(token).await;
                    }
                }
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "mutation failed");
                self.mutation_error = Some(error.clone());
                Err(error)
            }
        }
    }

    // Per-resource reloads. Failures stay on the resource; the mutation that
    // triggered the reload has already succeeded.

    async fn refresh_stats(&mut self, token: &str) {
        let ticket = self.stats.begin();
        let result = fetch_stats(&self.client, token).await;
        self.stats.resolve(ticket, result);
    }

    async fn refresh_jobs(&mut self, token: &str) {
        let ticket = self.jobs.begin();
        let result = fetch_jobs(&self.client, token).await;
        self.jobs.resolve(ticket, result);
    }

    async fn refresh_applications(&mut self, token: &str) {
        let ticket = self.applications.begin();
        let result = fetch_applications(&self.client, token).await;
        self.applications.resolve(ticket, result);
    }

    // ========================================================================
    // Optimistic Patches
    // ========================================================================
    // Pure in-memory updates for instant UI feedback, independent of the
    // mutation thunks. The next real fetch overwrites them; a stale in-flight
    // response cannot, because its ticket has been retired by then.

    pub fn optimistic_job_update(&mut self, job_id: &str, patch: &UpdateJobRequest) {
        if let Some(job) = self.jobs.data_mut().iter_mut().find(|j| j.id == job_id) {
            if let Some(title) = &patch.title {
                job.title = title.clone();
            }
            if let Some(description) = &patch.description {
                job.description = Some(description.clone());
            }
            if let Some(location) = &patch.location {
                job.location = Some(location.clone());
            }
            if let Some(job_type) = &patch.job_type {
                job.job_type = Some(job_type.clone());
            }
            if let Some(salary) = &patch.salary {
                job.salary = Some(salary.clone());
            }
            if let Some(status) = &patch.status {
                job.status = status.clone();
            }
        }
    }

    pub fn optimistic_application_update(&mut self, application_id: &str, status: &str) {
        if let Some(application) = self
            .applications
            .data_mut()
            .iter_mut()
            .find(|a| a.id == application_id)
        {
            application.status = status.to_string();
        }
    }
}

/// Combines the three dashboard failure messages into one error carrying the
/// kind of the first failure, so callers branching on the variant are not
/// steered into a connectivity retry when the backend actually answered.
fn aggregate_failure(first: &StoreError, message: String) -> StoreError {
    match first {
        StoreError::Network(_) => StoreError::Network(message),
        StoreError::Http { status, .. } => StoreError::Http {
            status: *status,
            message,
        },
        StoreError::Malformed(_) => StoreError::Malformed(message),
        StoreError::Validation(_) => StoreError::Validation(message),
    }
}

#[derive(Debug)]
enum MutationKind {
    Post { path: String, body: Value },
    Put { path: String, body: Value },
    Delete { path: String },
}

#[derive(Debug, Clone, Copy)]
enum Refetch {
    Jobs,
    JobsAndStats,
    ApplicationsAndStats,
}

// ============================================================================
// Resource Fetchers
// ============================================================================
// Free functions over the shared client so the three dashboard fetches can
// run concurrently while the store applies the outcomes afterwards.

async fn fetch_stats(client: &ApiClient, token: &str) -> Result<DashboardStats, StoreError> {
    client
        .get::<DashboardStats>("/companies/dashboard/stats", Some(token))
        .await
        .and_then(ApiOutcome::into_result)
}

async fn fetch_jobs(client: &ApiClient, token: &str) -> Result<Vec<EmployerJob>, StoreError> {
    client
        .get::<EmployerJobsResponse>("/companies/jobs", Some(token))
        .await
        .and_then(ApiOutcome::into_result)
        .map(|response| response.jobs)
}

async fn fetch_applications(
    client: &ApiClient,
    token: &str,
) -> Result<Vec<EmployerApplication>, StoreError> {
    client
        .get::<EmployerApplicationsResponse>("/companies/applications", Some(token))
        .await
        .and_then(ApiOutcome::into_result)
        .map(|response| response.applications)
}
