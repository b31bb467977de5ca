//! Envelopes for the remote promotions API.

use serde::Deserialize;

use crate::models::promotion::RawPromotion;

/// `GET /promotions/status-summary` response. The `all` bucket carries the
/// full record list; the per-status buckets only carry server-side counts.
#[derive(Debug, Deserialize)]
pub struct StatusSummaryResponse {
    pub status: bool,
    pub data: Option<StatusSummaryData>,
}

#[derive(Debug, Deserialize)]
pub struct StatusSummaryData {
    pub all: DiscountBucket,
    pub active: CountBucket,
    pub upcoming: CountBucket,
    pub expired: CountBucket,
}

#[derive(Debug, Deserialize)]
pub struct DiscountBucket {
    pub all_discounts: Vec<RawPromotion>,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CountBucket {
    pub count: i64,
}

/// Response of the delete and update endpoints.
#[derive(Debug, Deserialize)]
pub struct AckResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_summary() {
        let body = r#"{
            "status": true,
            "data": {
                "all": {
                    "all_discounts": [{
                        "id": "promo-1",
                        "discount_name": "Spring Sale",
                        "discount_type": "percentage",
                        "discount_value": 15.0,
                        "start_date": "2025-06-01T00:00:00Z",
                        "end_date": "2025-06-30T00:00:00Z",
                        "status": "enabled",
                        "usage_limit": 200,
                        "usage_count": 45,
                        "description": "15% off spring collection",
                        "created_at": "2025-05-20T10:00:00Z",
                        "updated_at": "2025-05-21T09:30:00Z"
                    }],
                    "count": 1
                },
                "active": { "count": 1 },
                "upcoming": { "count": 0 },
                "expired": { "count": 0 }
            }
        }"#;

        let summary: StatusSummaryResponse = serde_json::from_str(body).unwrap();
        assert!(summary.status);
        let data = summary.data.unwrap();
        assert_eq!(data.all.count, 1);
        assert_eq!(data.all.all_discounts.len(), 1);
        assert_eq!(data.all.all_discounts[0].discount_name, "Spring Sale");
        assert_eq!(data.active.count, 1);
        assert_eq!(data.expired.count, 0);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let body = r#"{ "status": true, "data": { "all": "nope" } }"#;
        assert!(serde_json::from_str::<StatusSummaryResponse>(body).is_err());
    }
}
