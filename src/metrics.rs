//! Redemption usage metrics for a single promotion.

use serde::Serialize;

use crate::models::Promotion;

/// Consumption view of a promotion's redemption cap, used for progress-bar
/// style display. A `limit` of 0 means the promotion is unlimited.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsageMetrics {
    pub used: u32,
    pub limit: u32,
}

impl UsageMetrics {
    pub fn of(promotion: &Promotion) -> Self {
        Self {
            used: promotion.usage_count,
            limit: promotion.usage_limit,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit == 0
    }

    /// Used redemptions as a percentage of the limit. May exceed 100 when the
    /// server reports over-limit usage; unlimited promotions report 0.
    pub fn ratio(&self) -> f64 {
        if self.is_unlimited() {
            return 0.0;
        }
        f64::from(self.used) / f64::from(self.limit) * 100.0
    }

    /// Redemptions left before the cap. Negative when usage exceeds the
    /// limit; `None` for unlimited promotions.
    pub fn remaining(&self) -> Option<i64> {
        if self.is_unlimited() {
            return None;
        }
        Some(i64::from(self.limit) - i64::from(self.used))
    }
}

impl Promotion {
    pub fn usage(&self) -> UsageMetrics {
        UsageMetrics::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(used: u32, limit: u32) -> UsageMetrics {
        UsageMetrics { used, limit }
    }

    #[test]
    fn test_ratio_and_remaining() {
        let m = metrics(45, 200);
        assert_eq!(m.ratio(), 22.5);
        assert_eq!(m.remaining(), Some(155));

        let m = metrics(132, 150);
        assert_eq!(m.ratio(), 88.0);
        assert_eq!(m.remaining(), Some(18));
    }

    #[test]
    fn test_over_limit_usage() {
        let m = metrics(250, 200);
        assert_eq!(m.ratio(), 125.0);
        assert_eq!(m.remaining(), Some(-50));
    }

    #[test]
    fn test_zero_limit_is_unlimited() {
        let m = metrics(45, 0);
        assert!(m.is_unlimited());
        assert_eq!(m.ratio(), 0.0);
        assert_eq!(m.remaining(), None);
    }
}
