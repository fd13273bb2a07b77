// src/account/mod.rs

pub mod models;
pub mod storage;
pub mod store;
pub mod validators;


// Re-export commonly used items
pub use models::{AuthPhase, AuthSession, Role, User};
pub use storage::SessionStorage;
pub use store::AccountStore;
