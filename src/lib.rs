//! Client-side state layer for the TalentLink recruitment platform.
//!
//! The crate exposes an API client plus five store slices - account,
//! job search, job applications, recommended jobs, and the employer
//! dashboard - together with the multi-step form wizards layered on top of
//! them. Stores own their data, a per-resource `loading`/`error` pair, and
//! the request sequencing that keeps late responses from overwriting newer
//! state. All HTTP goes through the [`api::HttpTransport`] seam, so the
//! whole layer is testable without a network.

pub mod account;
pub mod api;
pub mod applications;
pub mod common;
pub mod context;
pub mod employer;
pub mod jobs;
pub mod recommendations;
pub mod wizards;

pub use context::StoreContext;
