// src/main.rs
//
// Smoke-test CLI entry point: restores any persisted session and optionally
// runs a one-shot job search. The real UI layer lives elsewhere; this binary
// exists to exercise the store wiring end to end against a live backend.

use std::env;

use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use talentlink_client::account::AuthPhase;
use talentlink_client::common::ClientConfig;
use talentlink_client::StoreContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    info!(api = %config.api_base_url, "starting talentlink client");

    let mut context = StoreContext::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP transport: {e}"))?;

    context.account.restore_session();
    match context.account.phase() {
        AuthPhase::Authenticated => {
            let user = context.account.user().map(|u| u.name.clone()).unwrap_or_default();
            info!(user = %user, "session restored");
        }
        _ => info!("no persisted session, browsing anonymously"),
    }

    // One-shot search, driven by env vars so the binary stays argument-free.
    if let Ok(search) = env::var("TALENTLINK_SEARCH") {
        context.jobs.set_search_text(&search);
        if let Ok(location) = env::var("TALENTLINK_LOCATION") {
            context.jobs.set_location(&location);
        }

        match context.jobs.fetch_jobs(1, false).await {
            Ok(()) => {
                info!(
                    results = context.jobs.jobs().data().len(),
                    total = context.jobs.total_jobs(),
                    has_more = context.jobs.has_more(),
                    "search complete"
                );
                for job in context.jobs.jobs().data() {
                    info!(
                        id = %job.id,
                        title = %job.title,
                        company = %job.company.name,
                        "result"
                    );
                }
            }
            Err(e) => warn!(error = %e, "search failed"),
        }
    }

    Ok(())
}
