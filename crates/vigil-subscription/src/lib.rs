//! Subscription lifecycle & access gating.
//!
//! ## Components
//! - **resolver**: snapshot → [`DisplayState`], total and fail-open
//! - **policy**: access, CTA and badge predicates over a display state
//! - **view**: one resolved [`SubscriptionView`] per navigation; access is fail-closed
//! - **presentation**: banner and once-per-session modal decisions
//! - **gate**: full-page [`AccessGate`] for users without access
//! - **refresh**: latest-initiated-wins fetch bookkeeping
//! - **shell**: wires the above together for the layout

pub mod gate;
pub mod policy;
pub mod presentation;
pub mod refresh;
pub mod resolver;
pub mod shell;
pub mod view;

pub use gate::{AccessGate, GateAction, GateDecision, SubscriptionGate};
pub use policy::{badge_label, cta, has_access, show_reactivate_cta, show_upgrade_cta, CallToAction};
pub use presentation::{BannerTier, Presentation, PresentationCoordinator, Prompt};
pub use refresh::{FetchTicket, SnapshotRefresher};
pub use resolver::{resolve, DisplayState, StatusResolver};
pub use shell::{Frame, SubscriptionShell};
pub use view::{FetchFailure, SnapshotFetch, SubscriptionView};
