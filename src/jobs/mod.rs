// src/jobs/mod.rs

pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
pub use store::JobsStore;
