// Scripted transport for store tests: responses are registered per path
// prefix (optionally per method) and every request is recorded for
// assertions on call order and payloads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{ApiRequest, HttpTransport, Method, RawResponse, TransportError};

struct Rule {
    method: Option<Method>,
    path_prefix: String,
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
}

#[derive(Default)]
pub struct MockTransport {
    rules: Mutex<Vec<Arc<Rule>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Scripts a response for any method on paths starting with `path_prefix`.
    pub fn respond(&self, path_prefix: &str, status: u16, body: Value) {
        self.push_rule(None, path_prefix, Ok(RawResponse { status, body }));
    }

    /// Scripts a response for a specific method, so e.g. `POST /companies/jobs`
    /// and `GET /companies/jobs` can be scripted independently.
    pub fn respond_to(&self, method: Method, path_prefix: &str, status: u16, body: Value) {
        self.push_rule(Some(method), path_prefix, Ok(RawResponse { status, body }));
    }

    pub fn respond_err(&self, path_prefix: &str, error: TransportError) {
        self.push_rule(None, path_prefix, Err(error));
    }

    fn push_rule(
        &self,
        method: Option<Method>,
        path_prefix: &str,
        response: Result<RawResponse, TransportError>,
    ) {
        let mut rules = self.rules.lock().unwrap();
        if let Some(rule) = rules
            .iter()
            .find(|r| r.method == method && r.path_prefix == path_prefix)
        {
            rule.responses.lock().unwrap().push_back(response);
            return;
        }
        let rule = Rule {
            method,
            path_prefix: path_prefix.to_string(),
            responses: Mutex::new(VecDeque::from([response])),
        };
        rules.push(Arc::new(rule));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded `METHOD path` pairs, query strings stripped.
    pub fn request_log(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| {
                let path = r.path.split('?').next().unwrap_or(&r.path);
                format!("{} {}", r.method.as_str(), path)
            })
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let path = request.path.split('?').next().unwrap_or(&request.path);

        // Longest matching prefix wins, so "/companies/jobs/j1" can be
        // scripted separately from "/companies/jobs".
        let rule = {
            let rules = self.rules.lock().unwrap();
            rules
                .iter()
                .filter(|r| {
                    path.starts_with(&r.path_prefix)
                        && r.method.map_or(true, |m| m == request.method)
                })
                .max_by_key(|r| r.path_prefix.len())
                .cloned()
        };

        let rule = rule.unwrap_or_else(|| {
            panic!(
                "no scripted response for {} {}",
                request.method.as_str(),
                path
            )
        });

        let mut responses = rule.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            // The last scripted response is sticky, so refetch loops can be
            // scripted with a single entry.
            responses.front().cloned().unwrap_or_else(|| {
                panic!(
                    "scripted responses exhausted for {} {}",
                    request.method.as_str(),
                    path
                )
            })
        }
    }
}
