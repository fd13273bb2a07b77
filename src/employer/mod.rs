// src/employer/mod.rs

pub mod models;
pub mod store;
pub mod validators;


// Re-export commonly used items
pub use models::*;
pub use store::EmployerStore;
pub use validators::JobPostingValidator;
