//! Shared types for the intake service
//!
//! Data models and small utilities used by the server crate (and by
//! integration tests that assert on persisted rows).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{SubmissionCreate, SubmissionRecord};
