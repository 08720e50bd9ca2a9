//! PresentationCoordinator: banner and one-time modal decisions per page visit.
//!
//! - The banner shows on every qualifying visit until dismissed; dismissal is
//!   in-memory and cleared on the next navigation.
//! - The modal shows at most once per session, tracked by a flag in the
//!   injected [`SessionStore`]. If the store fails, the coordinator falls back
//!   to its own in-memory flag (once per mount).
//! - On the subscription management page the coordinator stays silent.

use serde::Serialize;
use tracing::{debug, warn};

use vigil_core::config::subscription_config::{
    DEFAULT_MANAGEMENT_PATH, DEFAULT_MODAL_FLAG_KEY, DEFAULT_URGENT_DAYS,
};
use vigil_core::config::SubscriptionConfig;
use vigil_core::{Page, SessionStore};

use crate::policy::CallToAction;
use crate::resolver::DisplayState;
use crate::view::SubscriptionView;

const FLAG_SET: &str = "true";

/// Visual urgency of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerTier {
    Info,
    Urgent,
    Critical,
}

/// Content shared by the banner and the modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub state: DisplayState,
    pub tier: BannerTier,
    pub cta: CallToAction,
    pub title: String,
    pub message: String,
}

impl Prompt {
    pub fn cta_label(&self) -> &'static str {
        self.cta.label()
    }
}

/// What to surface for one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Presentation {
    pub banner: Option<Prompt>,
    pub modal: Option<Prompt>,
}

impl Presentation {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.banner.is_none() && self.modal.is_none()
    }
}

/// States that warrant a banner (and, once per session, a modal).
pub fn is_prompt_eligible(state: DisplayState) -> bool {
    matches!(
        state,
        DisplayState::TrialEndingSoon
            | DisplayState::TrialExpired
            | DisplayState::Expired
            | DisplayState::Cancelled
    )
}

/// Banner tier for a state and the snapshot's remaining days.
pub fn banner_tier(state: DisplayState, days_remaining: Option<i64>, urgent_days: i64) -> BannerTier {
    match state {
        DisplayState::Expired | DisplayState::TrialExpired | DisplayState::Cancelled => {
            BannerTier::Critical
        }
        DisplayState::TrialEndingSoon if days_remaining.is_some_and(|d| d <= urgent_days) => {
            BannerTier::Urgent
        }
        _ => BannerTier::Info,
    }
}

pub struct PresentationCoordinator<S: SessionStore> {
    store: S,
    flag_key: String,
    management_path: String,
    urgent_days: i64,
    banner_dismissed: bool,
    modal_shown_this_mount: bool,
}

impl<S: SessionStore> PresentationCoordinator<S> {
    /// Coordinator with default thresholds and paths.
    pub fn new(store: S) -> Self {
        Self {
            store,
            flag_key: DEFAULT_MODAL_FLAG_KEY.to_string(),
            management_path: DEFAULT_MANAGEMENT_PATH.to_string(),
            urgent_days: DEFAULT_URGENT_DAYS,
            banner_dismissed: false,
            modal_shown_this_mount: false,
        }
    }

    pub fn from_config(store: S, config: &SubscriptionConfig) -> Self {
        Self {
            store,
            flag_key: config.effective_modal_flag_key().to_string(),
            management_path: config.effective_management_path().to_string(),
            urgent_days: config.effective_urgent_days(),
            banner_dismissed: false,
            modal_shown_this_mount: false,
        }
    }

    /// False on the management page: nothing is fetched there.
    pub fn should_fetch(&self, page: &Page) -> bool {
        !page.is_under(&self.management_path)
    }

    /// A new navigation brings a dismissed banner back.
    pub fn on_navigate(&mut self) {
        self.banner_dismissed = false;
    }

    pub fn dismiss_banner(&mut self) {
        debug!("Subscription banner dismissed for this visit");
        self.banner_dismissed = true;
    }

    pub fn banner_dismissed(&self) -> bool {
        self.banner_dismissed
    }

    /// Decide banner and modal for this render. May set the session flag.
    pub fn present(&mut self, page: &Page, view: &SubscriptionView) -> Presentation {
        if !self.should_fetch(page) {
            return Presentation::none();
        }

        let state = view.state();
        let Some(prompt) = build_prompt(view, self.urgent_days) else {
            return Presentation::none();
        };
        let banner = (!self.banner_dismissed).then(|| prompt.clone());
        let modal = self.claim_modal().then_some(prompt);

        debug!(
            state = state.as_str(),
            banner = banner.is_some(),
            modal = modal.is_some(),
            "Subscription presentation decided"
        );
        Presentation { banner, modal }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True exactly once per session, or once per mount if storage is unusable.
    fn claim_modal(&mut self) -> bool {
        if self.modal_shown_this_mount {
            return false;
        }

        let already_shown = match self.store.get(&self.flag_key) {
            Ok(value) => value.as_deref() == Some(FLAG_SET),
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, modal falls back to once per mount");
                false
            }
        };
        if already_shown {
            return false;
        }

        if let Err(e) = self.store.set(&self.flag_key, FLAG_SET) {
            warn!(error = %e, "Session storage unwritable, modal falls back to once per mount");
        }
        self.modal_shown_this_mount = true;
        true
    }
}

/// `None` for states that are not prompt-eligible.
fn build_prompt(view: &SubscriptionView, urgent_days: i64) -> Option<Prompt> {
    let state = view.state();
    if !is_prompt_eligible(state) {
        return None;
    }
    let days = view.days_remaining();
    let price = view
        .snapshot()
        .and_then(|s| s.monthly_price)
        .map(format_price);

    let (title, message) = match state {
        DisplayState::TrialEndingSoon => {
            let when = match days {
                Some(d) if d <= 0 => "today".to_string(),
                Some(1) => "in 1 day".to_string(),
                Some(d) => format!("in {d} days"),
                None => "soon".to_string(),
            };
            (
                "Your trial is ending soon".to_string(),
                with_price(format!("Your free trial ends {when}."), price.as_deref(), "Upgrade"),
            )
        }
        DisplayState::TrialExpired => (
            "Your trial has expired".to_string(),
            with_price(
                "Your free trial is over and monitoring is paused.".to_string(),
                price.as_deref(),
                "Upgrade",
            ),
        ),
        DisplayState::Expired => (
            "Your subscription has expired".to_string(),
            with_price(
                "Your subscription has lapsed and monitoring is paused.".to_string(),
                price.as_deref(),
                "Upgrade",
            ),
        ),
        DisplayState::Cancelled => (
            "Your subscription is cancelled".to_string(),
            "Reactivate to restore access to your competitor monitoring.".to_string(),
        ),
        DisplayState::Active | DisplayState::Trial => return None,
    };

    Some(Prompt {
        state,
        tier: banner_tier(state, days, urgent_days),
        cta: CallToAction::for_state(state),
        title,
        message,
    })
}

fn with_price(lead: String, price: Option<&str>, verb: &str) -> String {
    match price {
        Some(p) => format!("{lead} {verb} for {p}/month to keep tracking your competitors."),
        None => format!("{lead} {verb} to keep tracking your competitors."),
    }
}

/// `$199` for whole amounts, `$199.50` otherwise.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}
