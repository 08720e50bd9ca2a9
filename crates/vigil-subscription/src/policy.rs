//! Access policy: pure predicates over a [`DisplayState`].
//!
//! Nothing here knows about roles. Administrative bypass is applied by the
//! gate before the policy is consulted.

use serde::{Deserialize, Serialize};

use crate::resolver::DisplayState;

/// Call to action offered next to the subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    Upgrade,
    Reactivate,
}

impl CallToAction {
    /// "Reactivate" for cancelled subscriptions, "Upgrade" for everything else.
    pub fn for_state(state: DisplayState) -> Self {
        if show_reactivate_cta(state) {
            Self::Reactivate
        } else {
            Self::Upgrade
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upgrade => "Upgrade",
            Self::Reactivate => "Reactivate",
        }
    }
}

/// Whether gated product features are usable.
pub fn has_access(state: DisplayState) -> bool {
    matches!(
        state,
        DisplayState::Active | DisplayState::Trial | DisplayState::TrialEndingSoon
    )
}

pub fn show_upgrade_cta(state: DisplayState) -> bool {
    matches!(
        state,
        DisplayState::Trial
            | DisplayState::TrialEndingSoon
            | DisplayState::TrialExpired
            | DisplayState::Expired
    )
}

pub fn show_reactivate_cta(state: DisplayState) -> bool {
    state == DisplayState::Cancelled
}

/// The CTA to render for a state, if any. `Active` has none.
pub fn cta(state: DisplayState) -> Option<CallToAction> {
    if show_reactivate_cta(state) {
        Some(CallToAction::Reactivate)
    } else if show_upgrade_cta(state) {
        Some(CallToAction::Upgrade)
    } else {
        None
    }
}

/// Status badge text.
pub fn badge_label(state: DisplayState) -> &'static str {
    match state {
        DisplayState::Active => "Active",
        DisplayState::Trial | DisplayState::TrialEndingSoon => "Trial",
        DisplayState::TrialExpired | DisplayState::Expired => "Expired",
        DisplayState::Cancelled => "Cancelled",
    }
}
