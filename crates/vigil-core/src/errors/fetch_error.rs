//! Failures reported by the host when fetching the billing snapshot.
//! The core never performs the request itself; it only needs to know that it failed.

use super::error_code::{self, VigilErrorCode};
use super::SnapshotError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Billing endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Billing payload rejected: {0}")]
    Schema(#[from] SnapshotError),
}

impl VigilErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => error_code::FETCH_NETWORK,
            Self::HttpStatus { .. } => error_code::FETCH_HTTP_STATUS,
            Self::Schema(_) => error_code::FETCH_SCHEMA,
        }
    }
}
