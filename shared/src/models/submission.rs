//! Submission Record Model

use serde::{Deserialize, Serialize};

/// One device-status report (append-only intake row)
///
/// Created fully-formed by the request handler after validation and status
/// computation. No update or delete path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SubmissionRecord {
    pub id: i64,
    /// Numeric string, at most 10 chars
    pub user_id: String,
    /// Free text, at most 300 chars
    pub problem_description: String,
    /// At most 64 chars, never empty
    pub device_serial_number: String,
    pub light1: String,
    pub light2: String,
    pub light3: String,
    /// Diagnostic computed once at insertion, immutable thereafter
    pub response_status: String,
    /// UTC millis, set at insertion
    pub created_at: i64,
}

/// Create submission payload (validated form fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionCreate {
    pub user_id: String,
    #[serde(default)]
    pub problem_description: String,
    pub device_serial_number: String,
    pub light1: String,
    pub light2: String,
    pub light3: String,
}
