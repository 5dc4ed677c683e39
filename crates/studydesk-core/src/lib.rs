//! # studydesk-core
//!
//! Core types, traits, and errors shared by the studydesk crates.
//!
//! The persistence layer implements the repository traits defined here, the
//! renderer reports failures through [`Error`], and the HTTP layer serializes
//! the models directly.
//!
//! ## Log levels
//!
//! Every crate logs through `tracing` with `subsystem`, `component` and `op`
//! fields.
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed, operator attention may be needed |
//! | WARN  | Recoverable issue, fallback applied |
//! | INFO  | Lifecycle events, completed exports |
//! | DEBUG | Layout decisions, SQL operations |

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;

/// Generate a new time-ordered identifier for a stored record.
pub fn new_v7() -> uuid::Uuid {
    uuid::Uuid::now_v7()
}
