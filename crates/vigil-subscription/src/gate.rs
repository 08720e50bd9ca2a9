//! AccessGate: the full-page block rendered instead of product content.

use serde::Serialize;
use tracing::{debug, info};

use vigil_core::config::subscription_config::{DEFAULT_LOGOUT_PATH, DEFAULT_MANAGEMENT_PATH};
use vigil_core::config::SubscriptionConfig;
use vigil_core::{Page, Viewer};

use crate::view::SubscriptionView;

/// The only two things a blocked user can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateAction {
    ManageSubscription,
    Logout,
}

impl GateAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ManageSubscription => "Manage subscription",
            Self::Logout => "Log out",
        }
    }
}

/// Blocking view. Carries navigation targets and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessGate {
    management_path: String,
    logout_path: String,
}

impl AccessGate {
    pub const ACTIONS: [GateAction; 2] = [GateAction::ManageSubscription, GateAction::Logout];

    pub fn actions(&self) -> [GateAction; 2] {
        Self::ACTIONS
    }

    /// Route the host navigates to when an action is chosen.
    pub fn target(&self, action: GateAction) -> &str {
        match action {
            GateAction::ManageSubscription => &self.management_path,
            GateAction::Logout => &self.logout_path,
        }
    }
}

/// What the host renders in place of the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    RenderPage,
    /// First status fetch still in flight; render neither page nor gate.
    Wait,
    Block(AccessGate),
}

impl GateDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Applies role bypass and the management-page exemption, then asks the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionGate {
    gate: AccessGate,
}

impl Default for SubscriptionGate {
    fn default() -> Self {
        Self {
            gate: AccessGate {
                management_path: DEFAULT_MANAGEMENT_PATH.to_string(),
                logout_path: DEFAULT_LOGOUT_PATH.to_string(),
            },
        }
    }
}

impl SubscriptionGate {
    pub fn from_config(config: &SubscriptionConfig) -> Self {
        Self {
            gate: AccessGate {
                management_path: config.effective_management_path().to_string(),
                logout_path: config.effective_logout_path().to_string(),
            },
        }
    }

    pub fn management_path(&self) -> &str {
        &self.gate.management_path
    }

    pub fn decide(&self, viewer: &Viewer, page: &Page, view: &SubscriptionView) -> GateDecision {
        if viewer.bypasses_gate() {
            return GateDecision::RenderPage;
        }
        if page.is_under(&self.gate.management_path) {
            return GateDecision::RenderPage;
        }
        if view.is_pending() {
            debug!(page = page.path(), "Subscription status pending, holding page body");
            return GateDecision::Wait;
        }
        if view.has_access() {
            return GateDecision::RenderPage;
        }

        info!(
            page = page.path(),
            state = view.state().as_str(),
            fetch_failed = view.fetch().is_failed(),
            "Access denied, rendering subscription gate"
        );
        GateDecision::Block(self.gate.clone())
    }
}
