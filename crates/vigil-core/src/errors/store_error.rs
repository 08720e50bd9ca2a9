//! Session store errors.

use super::error_code::{self, VigilErrorCode};

/// Errors raised by a [`crate::traits::SessionStore`] backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Session storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Write rejected for key '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

impl VigilErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::WriteRejected { .. } => error_code::STORE_WRITE_REJECTED,
        }
    }
}
