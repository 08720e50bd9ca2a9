//! Boundary validation of the billing status payload.

use chrono::{TimeZone, Utc};
use vigil_core::{SnapshotError, SubscriptionSnapshot, SubscriptionStatus, VigilErrorCode};

// ============================================================
// Well-formed payloads
// ============================================================

#[test]
fn parses_full_backend_payload() {
    let body = r#"{
        "subscription_status": "trial",
        "trial_ends_at": "2026-10-21T09:00:00+00:00",
        "subscription_ends_at": null,
        "days_remaining": 3,
        "is_active": true,
        "monthly_price": 199
    }"#;

    let snap = SubscriptionSnapshot::from_json(body).unwrap();
    assert_eq!(snap.subscription_status, SubscriptionStatus::Trial);
    assert!(snap.is_active);
    assert_eq!(
        snap.trial_ends_at,
        Some(Utc.with_ymd_and_hms(2026, 10, 21, 9, 0, 0).unwrap())
    );
    assert_eq!(snap.subscription_ends_at, None);
    assert_eq!(snap.days_remaining, Some(3));
    assert_eq!(snap.monthly_price, Some(199.0));
}

#[test]
fn optional_fields_may_be_absent() {
    let snap =
        SubscriptionSnapshot::from_json(r#"{"subscription_status":"cancelled","is_active":false}"#)
            .unwrap();
    assert_eq!(snap, SubscriptionSnapshot::new(SubscriptionStatus::Cancelled, false));
}

#[test]
fn unknown_status_normalizes_instead_of_failing() {
    let snap =
        SubscriptionSnapshot::from_json(r#"{"subscription_status":"past_due","is_active":true}"#)
            .unwrap();
    assert_eq!(snap.subscription_status, SubscriptionStatus::Unrecognized);
}

#[test]
fn null_or_non_string_status_is_absorbed() {
    for body in [
        r#"{"subscription_status":null,"is_active":true}"#,
        r#"{"subscription_status":42,"is_active":true}"#,
        r#"{"subscription_status":{"name":"active"},"is_active":true}"#,
        r#"{"is_active":true}"#,
    ] {
        let snap = SubscriptionSnapshot::from_json(body).unwrap();
        assert_eq!(snap.subscription_status, SubscriptionStatus::Unrecognized, "{body}");
        assert!(snap.is_active);
    }
}

#[test]
fn unparseable_timestamp_becomes_none() {
    let snap = SubscriptionSnapshot::from_json(
        r#"{"subscription_status":"active","is_active":true,"subscription_ends_at":"soon"}"#,
    )
    .unwrap();
    assert_eq!(snap.subscription_ends_at, None);
}

#[test]
fn negative_days_remaining_is_kept_verbatim() {
    let snap = SubscriptionSnapshot::from_json(
        r#"{"subscription_status":"trial","is_active":true,"days_remaining":-2}"#,
    )
    .unwrap();
    assert_eq!(snap.days_remaining, Some(-2));
}

// ============================================================
// Schema violations
// ============================================================

#[test]
fn missing_is_active_is_a_schema_violation() {
    let err = SubscriptionSnapshot::from_json(r#"{"subscription_status":"trial"}"#).unwrap_err();
    assert!(matches!(err, SnapshotError::Schema { .. }));
    assert_eq!(err.error_code(), "SNAPSHOT_SCHEMA_VIOLATION");
}

#[test]
fn wrong_field_type_is_a_schema_violation() {
    let err = SubscriptionSnapshot::from_json(
        r#"{"subscription_status":"trial","is_active":"yes"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SnapshotError::Schema { .. }));
}

#[test]
fn non_object_body_is_a_schema_violation() {
    let err = SubscriptionSnapshot::from_json("[1,2,3]").unwrap_err();
    assert!(matches!(err, SnapshotError::Schema { .. }));
}

#[test]
fn non_json_body_is_invalid_json() {
    let err = SubscriptionSnapshot::from_json("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidJson(_)));
    assert_eq!(err.error_code(), "SNAPSHOT_INVALID_JSON");
}

#[test]
fn builder_matches_parsed_active_payload() {
    let ends = Utc.with_ymd_and_hms(2026, 11, 17, 0, 0, 0).unwrap();
    let parsed = SubscriptionSnapshot::from_json(
        r#"{"subscription_status":"active","is_active":true,
            "trial_ends_at":"2026-09-01T00:00:00Z",
            "subscription_ends_at":"2026-11-17T00:00:00",
            "days_remaining":30,"monthly_price":49.5}"#,
    )
    .unwrap();
    let built = SubscriptionSnapshot::new(SubscriptionStatus::Active, true)
        .with_trial_ends_at(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap())
        .with_subscription_ends_at(ends)
        .with_days_remaining(30)
        .with_monthly_price(49.5);
    assert_eq!(parsed, built);
}
