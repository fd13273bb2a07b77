// src/wizards/mod.rs
//
// Multi-step form workflows. These are pure per-page state machines layered
// on top of the stores; they hold no shared state and perform no I/O of
// their own.

pub mod application;
pub mod posting;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use application::{ApplicationStep, ApplicationWizard};
pub use posting::{JobPostingWizard, PostingStep};
