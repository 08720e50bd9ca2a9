//! One resolved view of the subscription per navigation.
//!
//! Banner, modal, badge and gate all read from the same [`SubscriptionView`],
//! so they can never disagree about the state they are reacting to.

use vigil_core::{FetchError, SubscriptionSnapshot, VigilErrorCode};

use crate::policy::{self, CallToAction};
use crate::resolver::{DisplayState, StatusResolver};

/// Why the last fetch produced no snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub code: &'static str,
    pub message: String,
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Outcome of the billing status fetch as seen by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnapshotFetch {
    /// No result has landed yet.
    #[default]
    Pending,
    Loaded(SubscriptionSnapshot),
    Failed(FetchFailure),
}

impl SnapshotFetch {
    pub fn from_result(result: Result<SubscriptionSnapshot, FetchError>) -> Self {
        match result {
            Ok(snapshot) => Self::Loaded(snapshot),
            Err(err) => Self::Failed(FetchFailure::from(&err)),
        }
    }

    pub fn snapshot(&self) -> Option<&SubscriptionSnapshot> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Display state and access derived once from a fetch outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionView {
    fetch: SnapshotFetch,
    state: DisplayState,
}

impl SubscriptionView {
    pub fn new(fetch: SnapshotFetch) -> Self {
        Self::resolve_with(fetch, &StatusResolver::default())
    }

    pub fn resolve_with(fetch: SnapshotFetch, resolver: &StatusResolver) -> Self {
        let state = resolver.resolve(fetch.snapshot());
        Self { fetch, state }
    }

    pub fn loaded(snapshot: SubscriptionSnapshot) -> Self {
        Self::new(SnapshotFetch::Loaded(snapshot))
    }

    pub fn fetch(&self) -> &SnapshotFetch {
        &self.fetch
    }

    pub fn snapshot(&self) -> Option<&SubscriptionSnapshot> {
        self.fetch.snapshot()
    }

    /// Display state. Optimistic: a missing snapshot reads as `Trial`.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Access. Pessimistic: only a loaded snapshot can grant it.
    pub fn has_access(&self) -> bool {
        match self.fetch {
            SnapshotFetch::Loaded(_) => policy::has_access(self.state),
            SnapshotFetch::Pending | SnapshotFetch::Failed(_) => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.fetch.is_pending()
    }

    pub fn days_remaining(&self) -> Option<i64> {
        self.snapshot().and_then(|s| s.days_remaining)
    }

    pub fn badge_label(&self) -> &'static str {
        policy::badge_label(self.state)
    }

    pub fn cta(&self) -> Option<CallToAction> {
        policy::cta(self.state)
    }
}

impl Default for SubscriptionView {
    fn default() -> Self {
        Self::new(SnapshotFetch::Pending)
    }
}
