//! Error taxonomy for the subscription layer.
//! Every error implements [`VigilErrorCode`] for stable, host-facing codes.

pub mod error_code;
mod config_error;
mod fetch_error;
mod snapshot_error;
mod store_error;

pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use fetch_error::FetchError;
pub use snapshot_error::SnapshotError;
pub use store_error::StoreError;

/// Top-level error type. All subsystem errors convert into this via `From`.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("session store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl VigilErrorCode for VigilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Snapshot(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Fetch(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type VigilResult<T> = Result<T, VigilError>;
