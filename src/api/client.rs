//! Thin API client over the transport seam.
//!
//! Every call resolves to one of three outcomes the stores care about:
//! - `Err(StoreError::Network)` - the request never completed (transport
//!   failure or timeout); the "thrown" branch of the contract.
//! - `Ok(ApiOutcome::Failure)` - the server answered with a non-2xx status.
//!   This includes 401 on an expired token, so the UI can redirect to login
//!   instead of hitting an unhandled failure path.
//! - `Ok(ApiOutcome::Success(T))` - a 2xx response decoded into `T`. A 2xx
//!   body that does not decode is a server contract violation and surfaces as
//!   `Err(StoreError::Malformed)`.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::common::error::{
    generic_http_message, StoreError, NETWORK_MESSAGE, TIMEOUT_MESSAGE,
};

use super::transport::{ApiRequest, HttpTransport, Method, TransportError};

/// Business-level outcome of a request that completed.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure {
        status: u16,
        /// Raw `error`/`message` field from the response body, when present.
        message: Option<String>,
    },
}

impl<T> ApiOutcome<T> {
    /// Collapses the outcome into a `Result`, mapping failures to a display-
    /// ready `StoreError::Http`. Flows with their own status-to-message table
    /// (login) match on the outcome instead.
    pub fn into_result(self) -> Result<T, StoreError> {
        match self {
            ApiOutcome::Success(data) => Ok(data),
            ApiOutcome::Failure { status, message } => Err(StoreError::Http {
                status,
                message: generic_http_message(status, message.as_deref()),
            }),
        }
    }
}

pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
        timeout: Option<Duration>,
    ) -> Result<ApiOutcome<T>, StoreError> {
        let request_id = Uuid::new_v4();
        debug!(
            request_id = %request_id,
            method = method.as_str(),
            path = %path,
            "issuing API request"
        );

        let request = ApiRequest {
            method,
            path: path.to_string(),
            token: token.map(str::to_string),
            body,
            timeout,
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(TransportError::Timeout) => {
                warn!(request_id = %request_id, path = %path, "request timed out");
                return Err(StoreError::Network(TIMEOUT_MESSAGE.to_string()));
            }
            Err(TransportError::Connect(e)) => {
                warn!(request_id = %request_id, path = %path, error = %e, "transport failure");
                return Err(StoreError::Network(NETWORK_MESSAGE.to_string()));
            }
        };

        if (200..300).contains(&response.status) {
            match serde_json::from_value::<T>(response.body) {
                Ok(data) => {
                    debug!(request_id = %request_id, status = response.status, "request succeeded");
                    Ok(ApiOutcome::Success(data))
                }
                Err(e) => {
                    error!(
                        request_id = %request_id,
                        path = %path,
                        error = %e,
                        "2xx response body did not match the expected shape"
                    );
                    Err(StoreError::malformed_response())
                }
            }
        } else {
            let message = extract_error_message(&response.body);
            debug!(
                request_id = %request_id,
                status = response.status,
                "request completed with error status"
            );
            Ok(ApiOutcome::Failure {
                status: response.status,
                message,
            })
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<ApiOutcome<T>, StoreError> {
        self.request(Method::Get, path, token, None, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<ApiOutcome<T>, StoreError> {
        self.request(Method::Post, path, token, Some(body), None).await
    }

    pub async fn post_with_timeout<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
        timeout: Duration,
    ) -> Result<ApiOutcome<T>, StoreError> {
        self.request(Method::Post, path, token, Some(body), Some(timeout))
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<ApiOutcome<T>, StoreError> {
        self.request(Method::Put, path, token, Some(body), None).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<ApiOutcome<T>, StoreError> {
        self.request(Method::Delete, path, token, None, None).await
    }
}

/// Builds a query string from key/value pairs, skipping empty values.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<String>>()
        .join("&")
}

fn extract_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        value: u32,
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let transport = MockTransport::new();
        transport.respond("/ping", 200, json!({"value": 7}));
        let client = ApiClient::new(transport.clone());

        let outcome = client.get::<Payload>("/ping", None).await.unwrap();
        match outcome {
            ApiOutcome::Success(payload) => assert_eq!(payload.value, 7),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_2xx_is_a_failure_outcome_not_an_error() {
        let transport = MockTransport::new();
        transport.respond("/secure", 401, json!({"error": "token expired"}));
        let client = ApiClient::new(transport.clone());

        let outcome = client.get::<Payload>("/secure", Some("stale")).await.unwrap();
        match outcome {
            ApiOutcome::Failure { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("token expired"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_2xx_body_is_a_malformed_error() {
        let transport = MockTransport::new();
        transport.respond("/ping", 200, json!({"unexpected": true}));
        let client = ApiClient::new(transport.clone());

        let result = client.get::<Payload>("/ping", None).await;
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn timeout_maps_to_network_error_with_retry_message() {
        let transport = MockTransport::new();
        transport.respond_err("/slow", TransportError::Timeout);
        let client = ApiClient::new(transport.clone());

        let result = client.get::<Payload>("/slow", None).await;
        match result {
            Err(StoreError::Network(message)) => assert_eq!(message, TIMEOUT_MESSAGE),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn encode_query_skips_empty_values_and_escapes() {
        let query = encode_query(&[
            ("search", "senior dev".to_string()),
            ("location", String::new()),
            ("page", "2".to_string()),
        ]);
        assert_eq!(query, "search=senior%20dev&page=2");
    }
}
