//! Lifecycle classification for promotions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw status value the remote system uses to disable a promotion
/// regardless of its date window.
pub const RAW_STATUS_DISABLED: &str = "disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    Upcoming,
    Active,
    Expired,
    Disabled,
}

impl std::fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionStatus::Upcoming => write!(f, "upcoming"),
            PromotionStatus::Active => write!(f, "active"),
            PromotionStatus::Expired => write!(f, "expired"),
            PromotionStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Derives the lifecycle status of a promotion from its date window and the
/// server-side raw status flag. Checks run in fixed priority order, first
/// match wins:
///
/// 1. raw status `"disabled"` always yields [`PromotionStatus::Disabled`]
/// 2. `now < start` yields [`PromotionStatus::Upcoming`]
/// 3. `now > end` yields [`PromotionStatus::Expired`]
/// 4. otherwise [`PromotionStatus::Active`]
///
/// Both window boundaries are inclusive: `now == start` and `now == end` are
/// `Active`. `now` is threaded explicitly so the function stays pure.
pub fn classify(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    raw_status: &str,
    now: DateTime<Utc>,
) -> PromotionStatus {
    if raw_status == RAW_STATUS_DISABLED {
        return PromotionStatus::Disabled;
    }
    if now < start {
        return PromotionStatus::Upcoming;
    }
    if now > end {
        return PromotionStatus::Expired;
    }
    PromotionStatus::Active
}
