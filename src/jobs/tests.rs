// src/jobs/tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    use crate::api::mock::MockTransport;
    use crate::api::ApiClient;
    use crate::jobs::models::{CompanyRef, Job, SortBy};
    use crate::jobs::store::{post_filter_job_types, sort_jobs, JobsStore};

    fn job(id: &str, days_old: i64, salary: &str, job_type: &str) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: CompanyRef {
                name: "Acme".to_string(),
                logo: None,
            },
            location: Some("Paris".to_string()),
            job_type: if job_type.is_empty() {
                None
            } else {
                Some(job_type.to_string())
            },
            description: None,
            salary: if salary.is_empty() {
                None
            } else {
                Some(salary.to_string())
            },
            created_at: Some(
                Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap() - Duration::days(days_old),
            ),
            skills: Vec::new(),
        }
    }

    fn page_body(jobs: serde_json::Value, total_jobs: u64, total_pages: u32) -> serde_json::Value {
        json!({"jobs": jobs, "totalJobs": total_jobs, "totalPages": total_pages})
    }

    fn wire_job(id: &str, created_at: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Job {}", id),
            "company": {"name": "Acme"},
            "createdAt": created_at,
            "skills": ["rust"]
        })
    }

    #[tokio::test]
    async fn fetch_replaces_list_and_tracks_pagination() {
        let transport = MockTransport::new();
        transport.respond(
            "/jobs/search",
            200,
            page_body(
                json!([wire_job("a", "2025-05-01T00:00:00Z"), wire_job("b", "2025-05-02T00:00:00Z")]),
                25,
                3,
            ),
        );
        let mut store = JobsStore::new(Arc::new(ApiClient::new(transport.clone())));

        store.fetch_jobs(1, false).await.unwrap();

        assert_eq!(store.jobs().data().len(), 2);
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_jobs(), 25);
        assert!(store.has_more());
    }

    #[tokio::test]
    async fn append_concatenates_for_load_more() {
        let transport = MockTransport::new();
        transport.respond(
            "/jobs/search",
            200,
            page_body(json!([wire_job("a", "2025-05-01T00:00:00Z")]), 2, 2),
        );
        transport.respond(
            "/jobs/search",
            200,
            page_body(json!([wire_job("b", "2025-04-01T00:00:00Z")]), 2, 2),
        );
        let mut store = JobsStore::new(Arc::new(ApiClient::new(transport.clone())));

        store.fetch_jobs(1, false).await.unwrap();
        store.fetch_jobs(2, true).await.unwrap();

        let ids: Vec<&str> = store.jobs().data().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.current_page(), 2);
        assert!(!store.has_more());
    }

    #[tokio::test]
    async fn filter_setter_resets_list_and_page_before_any_fetch() {
        let transport = MockTransport::new();
        transport.respond(
            "/jobs/search",
            200,
            page_body(json!([wire_job("a", "2025-05-01T00:00:00Z")]), 10, 5),
        );
        let mut store = JobsStore::new(Arc::new(ApiClient::new(transport.clone())));

        store.fetch_jobs(3, false).await.unwrap();
        assert_eq!(store.current_page(), 3);
        assert!(!store.jobs().data().is_empty());

        store.set_search_text("engineer");

        // Invariant: list empty and page back to 1, before any fetch resolves.
        assert!(store.jobs().data().is_empty());
        assert_eq!(store.current_page(), 1);
        assert!(!store.has_more());
    }

    #[tokio::test]
    async fn every_filter_setter_triggers_the_reset() {
        let transport = MockTransport::new();
        transport.respond(
            "/jobs/search",
            200,
            page_body(json!([wire_job("a", "2025-05-01T00:00:00Z")]), 10, 5),
        );
        let mut store = JobsStore::new(Arc::new(ApiClient::new(transport.clone())));

        let setters: Vec<Box<dyn Fn(&mut JobsStore)>> = vec![
            Box::new(|s| s.set_search_text("x")),
            Box::new(|s| s.set_location("Lyon")),
            Box::new(|s| s.set_skills(vec!["rust".to_string()])),
            Box::new(|s| s.set_job_types(vec!["contract".to_string()])),
            Box::new(|s| s.set_experience_level("senior")),
            Box::new(|s| s.set_sort_by(SortBy::Oldest)),
        ];

        for setter in setters {
            store.fetch_jobs(2, false).await.unwrap();
            setter(&mut store);
            assert!(store.jobs().data().is_empty());
            assert_eq!(store.current_page(), 1);
        }
    }

    #[tokio::test]
    async fn selected_job_types_narrow_the_fetched_page() {
        let transport = MockTransport::new();
        transport.respond(
            "/jobs/search",
            200,
            page_body(
                json!([
                    {"id": "ft", "title": "FT", "company": {"name": "Acme"}, "jobType": "full-time"},
                    {"id": "ct", "title": "CT", "company": {"name": "Acme"}, "jobType": "contract"},
                    {"id": "nt", "title": "NT", "company": {"name": "Acme"}}
                ]),
                3,
                1,
            ),
        );
        let mut store = JobsStore::new(Arc::new(ApiClient::new(transport.clone())));
        store.set_job_types(vec!["Contract".to_string()]);

        store.fetch_jobs(1, false).await.unwrap();

        let ids: Vec<&str> = store.jobs().data().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["ct"], "case-insensitive narrowing, untyped jobs dropped");
    }

    #[test]
    fn post_filter_with_no_selection_keeps_everything() {
        let jobs = vec![job("a", 1, "", "full-time"), job("b", 2, "", "")];
        let kept = post_filter_job_types(jobs, &[]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn salary_high_sort_ranks_missing_salary_as_zero() {
        let mut jobs = vec![
            job("a", 0, "$50,000", "full-time"),
            job("b", 0, "", "full-time"),
            job("c", 0, "$80,000", "full-time"),
        ];
        sort_jobs(&mut jobs, SortBy::SalaryHigh);

        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn salary_low_is_the_reverse_ranking() {
        let mut jobs = vec![
            job("a", 0, "$50,000", "full-time"),
            job("b", 0, "$80,000", "full-time"),
        ];
        sort_jobs(&mut jobs, SortBy::SalaryLow);
        assert_eq!(jobs[0].id, "a");
    }

    #[test]
    fn newest_sort_is_idempotent() {
        let mut jobs = vec![
            job("old", 30, "", ""),
            job("new", 1, "", ""),
            job("mid", 10, "", ""),
        ];
        sort_jobs(&mut jobs, SortBy::Newest);
        let once: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
        sort_jobs(&mut jobs, SortBy::Newest);
        let twice: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();

        assert_eq!(once, vec!["new", "mid", "old"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn oldest_sort_puts_missing_dates_first() {
        let mut jobs = vec![job("dated", 5, "", "")];
        jobs.push(Job {
            created_at: None,
            ..job("undated", 0, "", "")
        });
        sort_jobs(&mut jobs, SortBy::Oldest);
        assert_eq!(jobs[0].id, "undated");
    }
}
