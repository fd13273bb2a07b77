// src/recommendations/mod.rs

pub mod models;
pub mod store;


// Re-export commonly used items
pub use models::RecommendedJob;
pub use store::RecommendationsStore;
