//! Boundary validation errors for the billing status payload.

use super::error_code::{self, VigilErrorCode};

/// The payload could not be turned into a `SubscriptionSnapshot`.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Schema violation: {message}")]
    Schema { message: String },
}

impl VigilErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => error_code::SNAPSHOT_INVALID_JSON,
            Self::Schema { .. } => error_code::SNAPSHOT_SCHEMA,
        }
    }
}
