// Error handling types shared by every store

use thiserror::Error;

use super::validation::ValidationResult;

/// Message shown for transport failures where the request never completed.
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Message shown when a request was abandoned after its client-side timeout.
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";

/// Message shown when a 2xx response did not match the expected shape.
pub const MALFORMED_MESSAGE: &str = "Invalid data received from the server.";

/// Store error taxonomy. `Display` yields the user-facing text, so resources
/// can both branch on the kind and render the message directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport-level failure: the request never completed.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx response violated the expected contract.
    #[error("{0}")]
    Malformed(String),
    /// Rejected client-side before any network I/O.
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn malformed_response() -> Self {
        StoreError::Malformed(MALFORMED_MESSAGE.to_string())
    }

    /// True for responses that should redirect the user to the login page.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, StoreError::Http { status: 401, .. })
    }
}

impl From<ValidationResult> for StoreError {
    fn from(result: ValidationResult) -> Self {
        StoreError::Validation(result.message())
    }
}

/// Maps a login response status to its display message. The 422 branch keeps
/// the server-provided validation text when there is one.
pub fn login_error_message(status: u16, server_message: Option<&str>) -> String {
    match status {
        401 => "Invalid email or password. Please check your credentials.".to_string(),
        404 => "No account found for this email address.".to_string(),
        408 | 504 => TIMEOUT_MESSAGE.to_string(),
        422 => server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Validation failed.")
            .to_string(),
        s if s >= 500 => "Server error. Please try again later.".to_string(),
        s => format!("Login failed (status {}).", s),
    }
}

/// Fallback display message for non-2xx responses outside the login flow.
pub fn generic_http_message(status: u16, server_message: Option<&str>) -> String {
    match server_message.filter(|m| !m.trim().is_empty()) {
        Some(message) => message.to_string(),
        None => format!("Request failed (status {}).", status),
    }
}
