// Common module - shared types and utilities across all stores

pub mod config;
pub mod error;
pub mod helpers;
pub mod resource;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::StoreError;
pub use helpers::safe_email_log;
pub use resource::{RequestTicket, Resource};
pub use validation::{ValidationError, ValidationResult, Validator};
