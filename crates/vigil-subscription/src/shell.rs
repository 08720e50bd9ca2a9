//! SubscriptionShell: the single owner of subscription state in the layout.
//!
//! Mounted once at the highest common ancestor of every page. It fetches
//! once per navigation, resolves one [`SubscriptionView`], and hands that same
//! view to the gate and the presentation coordinator.

use serde::Serialize;

use vigil_core::config::SubscriptionConfig;
use vigil_core::{FetchError, Page, SessionStore, SubscriptionSnapshot, Viewer};

use crate::gate::{GateDecision, SubscriptionGate};
use crate::presentation::{Presentation, PresentationCoordinator};
use crate::refresh::{FetchTicket, SnapshotRefresher};
use crate::resolver::{DisplayState, StatusResolver};
use crate::view::SubscriptionView;

/// Everything the layout needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub state: DisplayState,
    pub badge: &'static str,
    pub gate: GateDecision,
    pub presentation: Presentation,
}

pub struct SubscriptionShell<S: SessionStore> {
    resolver: StatusResolver,
    refresher: SnapshotRefresher,
    coordinator: PresentationCoordinator<S>,
    gate: SubscriptionGate,
}

impl<S: SessionStore> SubscriptionShell<S> {
    pub fn new(store: S) -> Self {
        Self::from_config(store, &SubscriptionConfig::default())
    }

    pub fn from_config(store: S, config: &SubscriptionConfig) -> Self {
        Self {
            resolver: StatusResolver::from_config(config),
            refresher: SnapshotRefresher::new(),
            coordinator: PresentationCoordinator::from_config(store, config),
            gate: SubscriptionGate::from_config(config),
        }
    }

    /// Record a navigation. Returns a ticket when the host should fetch the
    /// billing status, or `None` on the management page.
    pub fn navigate(&mut self, page: &Page) -> Option<FetchTicket> {
        self.coordinator.on_navigate();
        self.coordinator
            .should_fetch(page)
            .then(|| self.refresher.begin())
    }

    /// Hand back the result of a fetch started by [`navigate`](Self::navigate).
    pub fn complete(
        &self,
        ticket: FetchTicket,
        outcome: Result<SubscriptionSnapshot, FetchError>,
    ) -> bool {
        self.refresher.complete(ticket, outcome)
    }

    pub fn view(&self) -> SubscriptionView {
        self.refresher.view(&self.resolver)
    }

    pub fn render(&mut self, viewer: &Viewer, page: &Page) -> Frame {
        let view = self.view();
        let gate = self.gate.decide(viewer, page, &view);
        // A blocked page shows the gate alone.
        let presentation = if gate.is_blocked() {
            Presentation::none()
        } else {
            self.coordinator.present(page, &view)
        };

        Frame {
            state: view.state(),
            badge: view.badge_label(),
            gate,
            presentation,
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.coordinator.dismiss_banner();
    }

    pub fn refresher(&self) -> &SnapshotRefresher {
        &self.refresher
    }

    pub fn coordinator(&self) -> &PresentationCoordinator<S> {
        &self.coordinator
    }
}
