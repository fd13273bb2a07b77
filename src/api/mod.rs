// src/api/mod.rs

pub mod client;
pub mod transport;

#[cfg(test)]
pub mod mock;

// Re-export commonly used items
pub use client::{encode_query, ApiClient, ApiOutcome};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, ReqwestTransport, TransportError};
