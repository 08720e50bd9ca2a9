//! Snapshot → display state classification.
//!
//! Total and deterministic: every snapshot, including a missing one, maps to
//! exactly one [`DisplayState`]. Unknown input degrades to `Trial`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vigil_core::config::subscription_config::DEFAULT_ENDING_SOON_DAYS;
use vigil_core::config::SubscriptionConfig;
use vigil_core::{SubscriptionSnapshot, SubscriptionStatus};

/// Discrete UI classification of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Active,
    Trial,
    TrialEndingSoon,
    TrialExpired,
    Expired,
    Cancelled,
}

impl DisplayState {
    pub const ALL: [DisplayState; 6] = [
        Self::Active,
        Self::Trial,
        Self::TrialEndingSoon,
        Self::TrialExpired,
        Self::Expired,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trial => "trial",
            Self::TrialEndingSoon => "trial_ending_soon",
            Self::TrialExpired => "trial_expired",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Resolver carrying the "ending soon" threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolver {
    ending_soon_days: i64,
}

impl Default for StatusResolver {
    fn default() -> Self {
        Self {
            ending_soon_days: DEFAULT_ENDING_SOON_DAYS,
        }
    }
}

impl StatusResolver {
    pub fn new(ending_soon_days: i64) -> Self {
        Self { ending_soon_days }
    }

    pub fn from_config(config: &SubscriptionConfig) -> Self {
        Self::new(config.effective_ending_soon_days())
    }

    pub fn ending_soon_days(&self) -> i64 {
        self.ending_soon_days
    }

    /// First match wins. `None` (pending or failed fetch) is `Trial`.
    pub fn resolve(&self, snapshot: Option<&SubscriptionSnapshot>) -> DisplayState {
        let Some(snap) = snapshot else {
            return DisplayState::Trial;
        };

        let state = match snap.subscription_status {
            SubscriptionStatus::Cancelled => DisplayState::Cancelled,
            SubscriptionStatus::Trial if !snap.is_active => DisplayState::TrialExpired,
            SubscriptionStatus::Trial => match snap.days_remaining {
                Some(days) if days <= self.ending_soon_days => DisplayState::TrialEndingSoon,
                _ => DisplayState::Trial,
            },
            SubscriptionStatus::Active if !snap.is_active => DisplayState::Expired,
            SubscriptionStatus::Active => DisplayState::Active,
            SubscriptionStatus::Expired => DisplayState::Expired,
            SubscriptionStatus::Unrecognized => DisplayState::Trial,
        };

        debug!(
            status = snap.subscription_status.as_str(),
            is_active = snap.is_active,
            days_remaining = snap.days_remaining,
            state = state.as_str(),
            "Resolved subscription display state"
        );
        state
    }
}

/// Resolve with the default threshold.
pub fn resolve(snapshot: Option<&SubscriptionSnapshot>) -> DisplayState {
    StatusResolver::default().resolve(snapshot)
}
