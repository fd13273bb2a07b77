// Client configuration loaded from the environment

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the client. Values come from environment
/// variables (a `.env` file is honored by the binary), with defaults that
/// point at a local development backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base_url: String,
    /// File holding the persisted auth session.
    pub session_file: PathBuf,
    /// Default timeout for all requests. Login additionally enforces its own
    /// shorter abort (see the account store).
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("TALENTLINK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        let session_file = env::var("TALENTLINK_SESSION_FILE")
            .unwrap_or_else(|_| "./.talentlink/session.json".to_string());
        let timeout_secs = env::var("TALENTLINK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_file: PathBuf::from(session_file),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
