//! # vigil-core
//!
//! Foundation crate for the Vigil subscription layer.
//! Defines the billing snapshot schema, viewer/page model, errors, config,
//! tracing setup and the session store trait. `vigil-subscription` builds on it.

pub mod config;
pub mod errors;
pub mod snapshot;
pub mod tracing;
pub mod traits;
pub mod viewer;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::error_code::VigilErrorCode;
pub use errors::{ConfigError, FetchError, SnapshotError, StoreError, VigilError, VigilResult};
pub use snapshot::{SubscriptionSnapshot, SubscriptionStatus};
pub use traits::{MemoryStore, SessionStore};
pub use viewer::{Page, Role, Viewer};
