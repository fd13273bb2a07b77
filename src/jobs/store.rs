//! Jobs search store: owns the filter set, the current result list, and
//! forward-only "load more" pagination.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{encode_query, ApiClient, ApiOutcome};
use crate::common::helpers::parse_salary;
use crate::common::{Resource, StoreError};

use super::models::{Job, JobFilters, JobSearchResponse, SortBy};

const DEFAULT_PAGE_SIZE: u32 = 10;

pub struct JobsStore {
    client: Arc<ApiClient>,
    filters: JobFilters,
    jobs: Resource<Vec<Job>>,
    current_page: u32,
    total_pages: u32,
    total_jobs: u64,
    page_size: u32,
}

impl JobsStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            filters: JobFilters::default(),
            jobs: Resource::default(),
            current_page: 1,
            total_pages: 0,
            total_jobs: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    pub fn jobs(&self) -> &Resource<Vec<Job>> {
        &self.jobs
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_jobs(&self) -> u64 {
        self.total_jobs
    }

    /// Forward-only pagination: more pages exist while the current page is
    /// behind the server-reported page count.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    // ========================================================================
    // Filter Setters
    // ========================================================================
    // Every setter resets pagination and empties the list synchronously, so
    // the UI never shows stale results mixed with new-filter results. The
    // reset also retires any in-flight fetch ticket.

    pub fn set_search_text(&mut self, search_text: &str) {
        self.filters.search_text = search_text.to_string();
        self.reset_results();
    }

    pub fn set_location(&mut self, location: &str) {
        self.filters.location = location.to_string();
        self.reset_results();
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.filters.skills = skills;
        self.reset_results();
    }

    pub fn set_job_types(&mut self, job_types: Vec<String>) {
        self.filters.job_types = job_types;
        self.reset_results();
    }

    pub fn set_experience_level(&mut self, experience_level: &str) {
        self.filters.experience_level = experience_level.to_string();
        self.reset_results();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.filters.sort_by = sort_by;
        self.reset_results();
    }

    fn reset_results(&mut self) {
        debug!("filters changed, invalidating result list");
        self.current_page = 1;
        self.total_pages = 0;
        self.total_jobs = 0;
        self.jobs.reset(Vec::new());
    }

    // ========================================================================
    // Fetch
    // ========================================================================

    /// Fetches one page of results. `append == true` concatenates onto the
    /// existing list (infinite-scroll load-more); `false` replaces it (first
    /// page after a filter change).
    pub async fn fetch_jobs(&mut self, page: u32, append: bool) -> Result<(), StoreError> {
        let page = page.max(1);
        let ticket = self.jobs.begin();

        let query = encode_query(&[
            ("search", self.filters.search_text.clone()),
            ("location", self.filters.location.clone()),
            ("skills", self.filters.skills.join(",")),
            ("experienceLevel", self.filters.experience_level.clone()),
            ("page", page.to_string()),
            ("limit", self.page_size.to_string()),
        ]);
        let path = format!("/jobs/search?{}", query);

        let result = self
            .client
            .get::<JobSearchResponse>(&path, None)
            .await
            .and_then(ApiOutcome::into_result);

        match result {
            Ok(response) => {
                // The backend search does not filter on job type yet, so the
                // page is narrowed client-side. Server-side filtering should
                // eventually subsume this step.
                let mut page_jobs = post_filter_job_types(response.jobs, &self.filters.job_types);
                sort_jobs(&mut page_jobs, self.filters.sort_by);

                let applied = if append {
                    self.jobs.apply(ticket, |list| list.extend(page_jobs))
                } else {
                    self.jobs.resolve(ticket, Ok(page_jobs))
                };

                if applied {
                    self.current_page = page;
                    self.total_pages = response.total_pages;
                    self.total_jobs = response.total_jobs;
                    info!(
                        page = page,
                        loaded = self.jobs.data().len(),
                        total = self.total_jobs,
                        "job search page loaded"
                    );
                }
                Ok(())
            }
            Err(e) => {
                self.jobs.fail(ticket, e.clone());
                Err(e)
            }
        }
    }
}

// ============================================================================
// Client-side post-processing
// ============================================================================

/// Narrows a result page by the locally-selected job types. An empty
/// selection keeps everything; matching is case-insensitive. Jobs without a
/// type are dropped only when a type filter is active.
pub(crate) fn post_filter_job_types(jobs: Vec<Job>, job_types: &[String]) -> Vec<Job> {
    if job_types.is_empty() {
        return jobs;
    }
    jobs.into_iter()
        .filter(|job| {
            job.job_type
                .as_deref()
                .map(|t| job_types.iter().any(|wanted| wanted.eq_ignore_ascii_case(t)))
                .unwrap_or(false)
        })
        .collect()
}

/// Sorts a result page in place. Date sorts treat a missing `created_at` as
/// the oldest possible; salary sorts parse the salary string best-effort,
/// with missing/non-numeric values ranked as 0. Stable, so re-sorting an
/// already-sorted list leaves the order unchanged.
pub(crate) fn sort_jobs(jobs: &mut [Job], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::SalaryHigh => jobs.sort_by(|a, b| {
            parse_salary(b.salary.as_deref()).cmp(&parse_salary(a.salary.as_deref()))
        }),
        SortBy::SalaryLow => jobs.sort_by(|a, b| {
            parse_salary(a.salary.as_deref()).cmp(&parse_salary(b.salary.as_deref()))
        }),
    }
}
