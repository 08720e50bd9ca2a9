//! PresentationCoordinator: banner, one-time modal, storage degradation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vigil_core::config::SubscriptionConfig;
use vigil_core::{MemoryStore, Page, SessionStore, StoreError, SubscriptionSnapshot, SubscriptionStatus};
use vigil_subscription::{BannerTier, DisplayState, PresentationCoordinator, SnapshotFetch, SubscriptionView};

/// Storage that refuses every read and write (private browsing).
struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "private browsing".into(),
        })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteRejected {
            key: key.into(),
            reason: "quota exceeded".into(),
        })
    }
}

/// Readable store that rejects writes and counts attempts.
#[derive(Default)]
struct ReadOnlyStore {
    writes: AtomicUsize,
}

impl SessionStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::WriteRejected {
            key: key.into(),
            reason: "read only".into(),
        })
    }
}

fn dashboard() -> Page {
    Page::new("/dashboard")
}

fn view(status: SubscriptionStatus, is_active: bool, days: Option<i64>) -> SubscriptionView {
    let snap = SubscriptionSnapshot::new(status, is_active);
    SubscriptionView::loaded(match days {
        Some(d) => snap.with_days_remaining(d),
        None => snap,
    })
}

// ============================================================
// Eligibility
// ============================================================

#[test]
fn healthy_states_show_nothing() {
    let mut coordinator = PresentationCoordinator::new(MemoryStore::new());
    for v in [
        view(SubscriptionStatus::Active, true, Some(20)),
        view(SubscriptionStatus::Trial, true, Some(12)),
        view(SubscriptionStatus::Trial, true, None),
    ] {
        assert!(coordinator.present(&dashboard(), &v).is_empty());
    }
    assert!(coordinator.store().is_empty(), "flag must not be created for healthy states");
}

#[test]
fn every_problem_state_gets_a_banner() {
    for v in [
        view(SubscriptionStatus::Trial, true, Some(5)),
        view(SubscriptionStatus::Trial, false, None),
        view(SubscriptionStatus::Expired, false, None),
        view(SubscriptionStatus::Cancelled, false, None),
    ] {
        let mut coordinator = PresentationCoordinator::new(MemoryStore::new());
        let presentation = coordinator.present(&dashboard(), &v);
        assert!(presentation.banner.is_some(), "{:?} should show a banner", v.state());
    }
}

#[test]
fn pending_and_failed_fetches_show_nothing() {
    let mut coordinator = PresentationCoordinator::new(MemoryStore::new());
    assert!(coordinator.present(&dashboard(), &SubscriptionView::default()).is_empty());

    let failed = SubscriptionView::new(SnapshotFetch::from_result(Err(
        vigil_core::FetchError::HttpStatus { status: 502 },
    )));
    assert!(coordinator.present(&dashboard(), &failed).is_empty());
}

// ============================================================
// Modal once per session
// ============================================================

#[test]
fn modal_once_banner_every_time() {
    let store = Arc::new(MemoryStore::new());
    let mut coordinator = PresentationCoordinator::new(Arc::clone(&store));
    let v = view(SubscriptionStatus::Expired, false, None);

    let first = coordinator.present(&dashboard(), &v);
    let second = coordinator.present(&Page::new("/competitors"), &v);

    assert!(first.banner.is_some());
    assert!(first.modal.is_some());
    assert!(second.banner.is_some());
    assert!(second.modal.is_none());
    assert_eq!(
        store.get("subscription_modal_shown").unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn flag_is_shared_across_mounts_in_a_session() {
    let store = Arc::new(MemoryStore::new());
    let v = view(SubscriptionStatus::Cancelled, false, None);

    let mut first_mount = PresentationCoordinator::new(Arc::clone(&store));
    assert!(first_mount.present(&dashboard(), &v).modal.is_some());

    // Full page reload: new coordinator, same session storage.
    let mut second_mount = PresentationCoordinator::new(Arc::clone(&store));
    let presentation = second_mount.present(&dashboard(), &v);
    assert!(presentation.modal.is_none());
    assert!(presentation.banner.is_some());
}

#[test]
fn new_session_shows_modal_again() {
    let v = view(SubscriptionStatus::Expired, false, None);
    let mut first = PresentationCoordinator::new(MemoryStore::new());
    let mut second = PresentationCoordinator::new(MemoryStore::new());
    assert!(first.present(&dashboard(), &v).modal.is_some());
    assert!(second.present(&dashboard(), &v).modal.is_some());
}

#[test]
fn configured_flag_key_is_used() {
    let store = Arc::new(MemoryStore::new());
    let config = SubscriptionConfig {
        modal_flag_key: Some("vigil.modal".into()),
        ..Default::default()
    };
    let mut coordinator = PresentationCoordinator::from_config(Arc::clone(&store), &config);
    coordinator.present(&dashboard(), &view(SubscriptionStatus::Expired, false, None));
    assert_eq!(store.get("vigil.modal").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("subscription_modal_shown").unwrap(), None);
}

// ============================================================
// Banner dismissal
// ============================================================

#[test]
fn dismissed_banner_stays_hidden_until_navigation() {
    let mut coordinator = PresentationCoordinator::new(MemoryStore::new());
    let v = view(SubscriptionStatus::Trial, true, Some(2));

    assert!(coordinator.present(&dashboard(), &v).banner.is_some());
    coordinator.dismiss_banner();
    assert!(coordinator.present(&dashboard(), &v).banner.is_none());
    assert!(coordinator.present(&dashboard(), &v).banner.is_none());

    coordinator.on_navigate();
    assert!(coordinator.present(&dashboard(), &v).banner.is_some());
}

#[test]
fn dismissal_does_not_touch_the_session_flag() {
    let store = Arc::new(MemoryStore::new());
    let mut coordinator = PresentationCoordinator::new(Arc::clone(&store));
    coordinator.dismiss_banner();
    assert!(store.is_empty());
}

// ============================================================
// Tiers and CTA labels
// ============================================================

#[test]
fn tier_and_cta_per_state() {
    let cases = [
        (view(SubscriptionStatus::Trial, true, Some(6)), BannerTier::Info, "Upgrade"),
        (view(SubscriptionStatus::Trial, true, Some(3)), BannerTier::Urgent, "Upgrade"),
        (view(SubscriptionStatus::Trial, true, Some(0)), BannerTier::Urgent, "Upgrade"),
        (view(SubscriptionStatus::Trial, false, None), BannerTier::Critical, "Upgrade"),
        (view(SubscriptionStatus::Active, false, None), BannerTier::Critical, "Upgrade"),
        (view(SubscriptionStatus::Cancelled, true, None), BannerTier::Critical, "Reactivate"),
    ];

    for (v, tier, label) in cases {
        let mut coordinator = PresentationCoordinator::new(MemoryStore::new());
        let presentation = coordinator.present(&dashboard(), &v);
        let banner = presentation.banner.expect("banner");
        let modal = presentation.modal.expect("modal");
        assert_eq!(banner.tier, tier, "{:?}", v.state());
        assert_eq!(banner.cta_label(), label);
        assert_eq!(modal.cta_label(), label);
    }
}

#[test]
fn configured_urgent_threshold() {
    let config = SubscriptionConfig {
        urgent_days: Some(5),
        ..Default::default()
    };
    let mut coordinator = PresentationCoordinator::from_config(MemoryStore::new(), &config);
    let banner = coordinator
        .present(&dashboard(), &view(SubscriptionStatus::Trial, true, Some(5)))
        .banner
        .unwrap();
    assert_eq!(banner.tier, BannerTier::Urgent);
    assert_eq!(banner.state, DisplayState::TrialEndingSoon);
}

// ============================================================
// Management page
// ============================================================

#[test]
fn silent_on_management_page() {
    let store = Arc::new(MemoryStore::new());
    let mut coordinator = PresentationCoordinator::new(Arc::clone(&store));
    let v = view(SubscriptionStatus::Cancelled, false, None);

    for path in [
        "/subscription",
        "/subscription/",
        "/subscription/checkout",
        "/subscription?success=true",
        "/subscription#plans",
    ] {
        let page = Page::new(path);
        assert!(!coordinator.should_fetch(&page));
        assert!(coordinator.present(&page, &v).is_empty());
    }
    assert!(store.is_empty(), "management page must not consume the modal");
    assert!(coordinator.should_fetch(&dashboard()));
}

// ============================================================
// Storage unavailable
// ============================================================

#[test]
fn unavailable_storage_shows_modal_once_per_mount() {
    let v = view(SubscriptionStatus::Expired, false, None);

    let mut mount = PresentationCoordinator::new(UnavailableStore);
    assert!(mount.present(&dashboard(), &v).modal.is_some());
    assert!(mount.present(&dashboard(), &v).modal.is_none());

    let mut remount = PresentationCoordinator::new(UnavailableStore);
    assert!(remount.present(&dashboard(), &v).modal.is_some());
}

#[test]
fn rejected_write_still_limits_modal_within_mount() {
    let store = Arc::new(ReadOnlyStore::default());
    let mut coordinator = PresentationCoordinator::new(Arc::clone(&store));
    let v = view(SubscriptionStatus::Cancelled, false, None);

    assert!(coordinator.present(&dashboard(), &v).modal.is_some());
    assert!(coordinator.present(&dashboard(), &v).modal.is_none());
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);
}
