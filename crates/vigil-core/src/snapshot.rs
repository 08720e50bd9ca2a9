//! Billing status snapshot: the payload of `GET /api/subscription/status`.
//!
//! The snapshot is validated once at the boundary: status strings are
//! normalized into [`SubscriptionStatus`] (unknown values become
//! [`SubscriptionStatus::Unrecognized`]) and timestamps are parsed leniently.
//! Nothing downstream ever sees an untyped string.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::SnapshotError;

/// Backend subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Expired,
    Cancelled,
    /// Any value the backend sent that this layer does not know about.
    Unrecognized,
}

impl SubscriptionStatus {
    pub const KNOWN: [SubscriptionStatus; 4] =
        [Self::Trial, Self::Active, Self::Expired, Self::Cancelled];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Normalize a raw status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trial" => Self::Trial,
            "active" => Self::Active,
            "expired" => Self::Expired,
            "cancelled" => Self::Cancelled,
            _ => Self::Unrecognized,
        }
    }
}

/// A validated billing snapshot. Read-only to this layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionSnapshot {
    pub subscription_status: SubscriptionStatus,
    pub is_active: bool,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub subscription_ends_at: Option<DateTime<Utc>>,
    /// Whole days until the current period ends, as computed by the backend.
    pub days_remaining: Option<i64>,
    pub monthly_price: Option<f64>,
}

/// Raw shape accepted from the wire before normalization.
#[derive(Debug, Deserialize)]
struct WireSnapshot {
    /// Kept untyped: a missing, null or non-string status is absorbed, not rejected.
    #[serde(default)]
    subscription_status: Option<serde_json::Value>,
    is_active: bool,
    #[serde(default)]
    trial_ends_at: Option<String>,
    #[serde(default)]
    subscription_ends_at: Option<String>,
    #[serde(default)]
    days_remaining: Option<i64>,
    #[serde(default)]
    monthly_price: Option<f64>,
}

impl SubscriptionSnapshot {
    /// Snapshot with only status and activity set.
    pub fn new(subscription_status: SubscriptionStatus, is_active: bool) -> Self {
        Self {
            subscription_status,
            is_active,
            trial_ends_at: None,
            subscription_ends_at: None,
            days_remaining: None,
            monthly_price: None,
        }
    }

    pub fn with_days_remaining(mut self, days: i64) -> Self {
        self.days_remaining = Some(days);
        self
    }

    pub fn with_monthly_price(mut self, price: f64) -> Self {
        self.monthly_price = Some(price);
        self
    }

    pub fn with_trial_ends_at(mut self, at: DateTime<Utc>) -> Self {
        self.trial_ends_at = Some(at);
        self
    }

    pub fn with_subscription_ends_at(mut self, at: DateTime<Utc>) -> Self {
        self.subscription_ends_at = Some(at);
        self
    }

    /// Parse and validate a JSON body from the billing endpoint.
    pub fn from_json(body: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Validate an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        if !value.is_object() {
            return Err(SnapshotError::Schema {
                message: "expected a JSON object".to_string(),
            });
        }

        let wire: WireSnapshot =
            serde_json::from_value(value).map_err(|e| SnapshotError::Schema {
                message: e.to_string(),
            })?;

        let subscription_status = normalize_status(wire.subscription_status.as_ref());

        Ok(Self {
            subscription_status,
            is_active: wire.is_active,
            trial_ends_at: parse_timestamp("trial_ends_at", wire.trial_ends_at),
            subscription_ends_at: parse_timestamp("subscription_ends_at", wire.subscription_ends_at),
            days_remaining: wire.days_remaining,
            monthly_price: wire.monthly_price,
        })
    }
}

fn normalize_status(raw: Option<&serde_json::Value>) -> SubscriptionStatus {
    let status = match raw {
        Some(serde_json::Value::String(s)) => SubscriptionStatus::parse(s),
        _ => SubscriptionStatus::Unrecognized,
    };
    if status == SubscriptionStatus::Unrecognized {
        let shown = raw.map_or_else(|| "<missing>".to_string(), |v| v.to_string());
        warn!(
            status = shown.as_str(),
            "Unrecognized subscription status, normalizing to unrecognized"
        );
    }
    status
}

/// RFC 3339, or a naive ISO datetime taken as UTC. Anything else is dropped.
fn parse_timestamp(field: &'static str, raw: Option<String>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    warn!(field, value = trimmed, "Unparseable timestamp in billing snapshot, ignoring");
    None
}
