//! Shared traits used across Vigil crates.

pub mod session_store;

pub use session_store::{MemoryStore, SessionStore};
