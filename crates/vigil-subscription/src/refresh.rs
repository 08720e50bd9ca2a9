//! SnapshotRefresher: keeps the result of the latest-initiated fetch.
//!
//! Each navigation takes a generation ticket before fetching. A result is
//! applied only if its ticket is still the newest one issued; anything older
//! is discarded, so a slow early request can never overwrite a fresher one.

use std::future::Future;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use vigil_core::{FetchError, SubscriptionSnapshot, VigilErrorCode};

use crate::resolver::StatusResolver;
use crate::view::{SnapshotFetch, SubscriptionView};

/// Identifies which fetch a result belongs to. Consumed by `complete`, so a
/// ticket can be redeemed once:
///
/// ```compile_fail
/// use vigil_core::{SubscriptionSnapshot, SubscriptionStatus};
/// use vigil_subscription::SnapshotRefresher;
///
/// let refresher = SnapshotRefresher::new();
/// let ticket = refresher.begin();
/// let snap = SubscriptionSnapshot::new(SubscriptionStatus::Active, true);
/// refresher.complete(ticket, Ok(snap.clone()));
/// refresher.complete(ticket, Ok(snap));
/// ```
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket must be passed back to `complete`"]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct RefreshState {
    issued: u64,
    applied: u64,
    latest: SnapshotFetch,
}

#[derive(Debug, Default)]
pub struct SnapshotRefresher {
    state: RwLock<RefreshState>,
}

impl SnapshotRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Supersedes every ticket issued before it and drops the
    /// applied result, so nothing older than this fetch is served meanwhile.
    pub fn begin(&self) -> FetchTicket {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.issued += 1;
        state.latest = SnapshotFetch::Pending;
        debug!(generation = state.issued, "Subscription status fetch started");
        FetchTicket {
            generation: state.issued,
        }
    }

    /// Apply a fetch result. Returns false if the ticket was superseded.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        outcome: Result<SubscriptionSnapshot, FetchError>,
    ) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if ticket.generation != state.issued {
            debug!(
                generation = ticket.generation,
                latest = state.issued,
                "Discarding superseded subscription status result"
            );
            return false;
        }

        if let Err(e) = &outcome {
            warn!(
                generation = ticket.generation,
                code = e.error_code(),
                error = %e,
                "Subscription status fetch failed"
            );
        }

        state.applied = ticket.generation;
        state.latest = SnapshotFetch::from_result(outcome);
        true
    }

    /// begin → await → complete.
    pub async fn refresh<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = Result<SubscriptionSnapshot, FetchError>>,
    {
        let ticket = self.begin();
        let outcome = fetch.await;
        self.complete(ticket, outcome)
    }

    /// Outcome of the newest fetch, or `Pending` while it is in flight.
    pub fn current(&self) -> SnapshotFetch {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .clone()
    }

    pub fn view(&self, resolver: &StatusResolver) -> SubscriptionView {
        SubscriptionView::resolve_with(self.current(), resolver)
    }

    /// Whether a newer fetch than the applied result is still outstanding.
    pub fn is_refreshing(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.issued > state.applied
    }
}
