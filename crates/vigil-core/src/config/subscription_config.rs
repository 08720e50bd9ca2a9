//! Subscription presentation and gating configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_ENDING_SOON_DAYS: i64 = 7;
pub const DEFAULT_URGENT_DAYS: i64 = 3;
pub const DEFAULT_MODAL_FLAG_KEY: &str = "subscription_modal_shown";
pub const DEFAULT_MANAGEMENT_PATH: &str = "/subscription";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout";

/// `[subscription]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubscriptionConfig {
    /// A trial with this many days left (or fewer) is "ending soon". Default: 7.
    pub ending_soon_days: Option<i64>,
    /// An ending-soon trial with this many days left (or fewer) is urgent. Default: 3.
    pub urgent_days: Option<i64>,
    /// Session storage key for the one-time modal flag.
    pub modal_flag_key: Option<String>,
    /// Route of the subscription management page. Default: "/subscription".
    pub management_path: Option<String>,
    /// Route that ends the session. Default: "/logout".
    pub logout_path: Option<String>,
}

impl SubscriptionConfig {
    pub fn effective_ending_soon_days(&self) -> i64 {
        self.ending_soon_days.unwrap_or(DEFAULT_ENDING_SOON_DAYS)
    }

    pub fn effective_urgent_days(&self) -> i64 {
        self.urgent_days.unwrap_or(DEFAULT_URGENT_DAYS)
    }

    pub fn effective_modal_flag_key(&self) -> &str {
        self.modal_flag_key.as_deref().unwrap_or(DEFAULT_MODAL_FLAG_KEY)
    }

    pub fn effective_management_path(&self) -> &str {
        self.management_path.as_deref().unwrap_or(DEFAULT_MANAGEMENT_PATH)
    }

    pub fn effective_logout_path(&self) -> &str {
        self.logout_path.as_deref().unwrap_or(DEFAULT_LOGOUT_PATH)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let soon = self.effective_ending_soon_days();
        let urgent = self.effective_urgent_days();
        if soon < 0 {
            return Err(ConfigError::Invalid {
                field: "ending_soon_days",
                message: format!("must be non-negative, got {soon}"),
            });
        }
        if urgent < 0 || urgent > soon {
            return Err(ConfigError::Invalid {
                field: "urgent_days",
                message: format!("must be between 0 and ending_soon_days ({soon}), got {urgent}"),
            });
        }
        if self.effective_modal_flag_key().trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "modal_flag_key",
                message: "must not be empty".to_string(),
            });
        }
        for (field, path) in [
            ("management_path", self.effective_management_path()),
            ("logout_path", self.effective_logout_path()),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be an absolute route, got '{path}'"),
                });
            }
        }
        Ok(())
    }
}
