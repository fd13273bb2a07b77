//! Explicit application-state container.
//!
//! One constructed instance owns the shared API client and every store
//! slice; it is passed into the UI tree rather than living as a module-level
//! global, so tests and concurrent instances (e.g. server-side rendering)
//! stay isolated.

use std::sync::Arc;

use crate::account::{AccountStore, SessionStorage};
use crate::api::{ApiClient, HttpTransport, ReqwestTransport, TransportError};
use crate::applications::ApplicationsStore;
use crate::common::ClientConfig;
use crate::employer::EmployerStore;
use crate::jobs::JobsStore;
use crate::recommendations::RecommendationsStore;

pub struct StoreContext {
    pub account: AccountStore,
    pub jobs: JobsStore,
    pub applications: ApplicationsStore,
    pub recommendations: RecommendationsStore,
    pub employer: EmployerStore,
}

impl StoreContext {
    /// Builds a context over any transport; tests inject a mock here.
    pub fn new(transport: Arc<dyn HttpTransport>, storage: SessionStorage) -> Self {
        let client = Arc::new(ApiClient::new(transport));
        Self {
            account: AccountStore::new(Arc::clone(&client), storage),
            jobs: JobsStore::new(Arc::clone(&client)),
            applications: ApplicationsStore::new(Arc::clone(&client)),
            recommendations: RecommendationsStore::new(Arc::clone(&client)),
            employer: EmployerStore::new(client),
        }
    }

    /// Production wiring: reqwest transport plus file-backed session storage,
    /// both configured from the environment.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = Arc::new(ReqwestTransport::new(
            &config.api_base_url,
            config.request_timeout,
        )?);
        let storage = SessionStorage::new(config.session_file.clone());
        Ok(Self::new(transport, storage))
    }
}
