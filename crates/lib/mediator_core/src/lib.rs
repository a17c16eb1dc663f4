//! # mediator_core
//!
//! Core mediation logic for Mediator Bot: chat models, the completion
//! collaborator, and the mediation decision processor.

pub mod completion;
pub mod mediation;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
