// src/applications/tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::mock::MockTransport;
    use crate::api::ApiClient;
    use crate::applications::models::{
        ApplicationCompany, ApplicationJobRef, JobApplication,
    };
    use crate::applications::store::{derive_stats, ApplicationsStore};

    fn application(id: &str, status: &str) -> JobApplication {
        JobApplication {
            id: id.to_string(),
            job: ApplicationJobRef {
                id: format!("job-{}", id),
                title: "Backend Engineer".to_string(),
                company: ApplicationCompany {
                    name: "Acme".to_string(),
                },
            },
            status: status.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn wire_application(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "job": {"id": format!("job-{}", id), "title": "Backend Engineer", "company": {"name": "Acme"}},
            "status": status
        })
    }

    #[test]
    fn stats_derivation_counts_each_bucket() {
        let list = vec![
            application("1", "pending"),
            application("2", "interview"),
            application("3", "shortlisted"),
            application("4", "rejected"),
            application("5", "interviewed"),
        ];
        let stats = derive_stats(&list, 5);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.in_progress, 2, "pending + shortlisted");
        assert_eq!(stats.interviews, 2, "interview + interviewed");
    }

    #[test]
    fn stats_matching_is_case_insensitive() {
        let list = vec![
            application("1", "PENDING"),
            application("2", "Interview"),
            application("3", "Reviewing"),
        ];
        let stats = derive_stats(&list, 3);

        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.interviews, 1);
    }

    #[tokio::test]
    async fn total_comes_from_the_server_not_the_local_list() {
        let transport = MockTransport::new();
        transport.respond(
            "/candidates/applications",
            200,
            json!({
                "applications": [wire_application("1", "pending")],
                "totalApplications": 42,
                "totalPages": 9
            }),
        );
        let mut store = ApplicationsStore::new(Arc::new(ApiClient::new(transport.clone())));

        store.fetch_applications("tok", 1, 5).await.unwrap();

        assert_eq!(store.stats().total, 42);
        assert_eq!(store.applications().data().len(), 1);
        assert!(store.has_more());
    }

    #[tokio::test]
    async fn local_status_patch_recomputes_stats() {
        let transport = MockTransport::new();
        transport.respond(
            "/candidates/applications",
            200,
            json!({
                "applications": [
                    wire_application("1", "pending"),
                    wire_application("2", "pending")
                ],
                "totalApplications": 2,
                "totalPages": 1
            }),
        );
        let mut store = ApplicationsStore::new(Arc::new(ApiClient::new(transport.clone())));
        store.fetch_applications("tok", 1, 10).await.unwrap();
        assert_eq!(store.stats().in_progress, 2);
        assert_eq!(store.stats().interviews, 0);

        store.patch_status("2", "interview");

        assert_eq!(store.stats().in_progress, 1);
        assert_eq!(store.stats().interviews, 1);
        assert_eq!(store.stats().total, 2, "total untouched by local patch");
    }

    #[tokio::test]
    async fn patching_an_unknown_application_changes_nothing() {
        let transport = MockTransport::new();
        transport.respond(
            "/candidates/applications",
            200,
            json!({
                "applications": [wire_application("1", "pending")],
                "totalApplications": 1,
                "totalPages": 1
            }),
        );
        let mut store = ApplicationsStore::new(Arc::new(ApiClient::new(transport.clone())));
        store.fetch_applications("tok", 1, 10).await.unwrap();
        let before = store.stats();

        store.patch_status("missing", "interview");

        assert_eq!(store.stats(), before);
    }

    #[tokio::test]
    async fn failed_fetch_parks_the_error_on_the_resource() {
        let transport = MockTransport::new();
        transport.respond("/candidates/applications", 500, json!({}));
        let mut store = ApplicationsStore::new(Arc::new(ApiClient::new(transport.clone())));

        let err = store.fetch_applications("tok", 1, 10).await.unwrap_err();

        assert_eq!(
            store.applications().error().map(ToString::to_string),
            Some(err.to_string())
        );
        assert!(!store.applications().loading());
    }
}
