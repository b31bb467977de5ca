use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::status::{PromotionStatus, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionType {
    Percentage,
    FixedAmount,
}

impl PromotionType {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw {
            "percentage" => Ok(PromotionType::Percentage),
            "fixed_amount" => Ok(PromotionType::FixedAmount),
            other => Err(AppError::MalformedResponse(format!(
                "unknown discount_type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for PromotionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionType::Percentage => write!(f, "percentage"),
            PromotionType::FixedAmount => write!(f, "fixed_amount"),
        }
    }
}

/// Wire shape of a promotion record as the remote API returns it.
/// Dates arrive as RFC 3339 strings and are validated at the conversion
/// boundary, so everything past [`Promotion::from_raw`] works on typed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPromotion {
    pub id: String,
    pub discount_name: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub usage_limit: u32,
    pub usage_count: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Fully typed promotion record. `status` is derived from the date window at
/// conversion time and never sent back to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub name: String,
    pub promotion_type: PromotionType,
    pub value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: PromotionStatus,
    pub usage_limit: u32,
    pub usage_count: u32,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn parse_instant(field: &str, raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::MalformedResponse(format!("invalid {field} '{raw}': {e}")))
}

fn parse_optional_instant(field: &str, raw: &Option<String>) -> AppResult<Option<DateTime<Utc>>> {
    match raw {
        Some(s) => parse_instant(field, s).map(Some),
        None => Ok(None),
    }
}

impl Promotion {
    /// Converts a raw API record into the typed model, deriving the lifecycle
    /// status with the supplied `now`.
    pub fn from_raw(raw: RawPromotion, now: DateTime<Utc>) -> AppResult<Self> {
        let start_date = parse_instant("start_date", &raw.start_date)?;
        let end_date = parse_instant("end_date", &raw.end_date)?;
        let status = classify(start_date, end_date, &raw.status, now);

        Ok(Self {
            id: raw.id,
            name: raw.discount_name,
            promotion_type: PromotionType::parse(&raw.discount_type)?,
            value: raw.discount_value,
            start_date,
            end_date,
            status,
            usage_limit: raw.usage_limit,
            usage_count: raw.usage_count,
            description: raw.description,
            created_at: parse_optional_instant("created_at", &raw.created_at)?,
            updated_at: parse_optional_instant("updated_at", &raw.updated_at)?,
        })
    }

    /// Patches the record with the fields of an accepted update request and
    /// re-derives the status, since the date window may have moved.
    pub fn apply_update(&mut self, update: &UpdatePromotion, now: DateTime<Utc>) -> AppResult<()> {
        if let Some(name) = &update.discount_name {
            self.name = name.clone();
        }
        if let Some(promotion_type) = &update.discount_type {
            self.promotion_type = PromotionType::parse(promotion_type)?;
        }
        if let Some(value) = update.discount_value {
            self.value = value;
        }
        if let Some(start) = &update.start_date {
            self.start_date = parse_instant("start_date", start)?;
        }
        if let Some(end) = &update.end_date {
            self.end_date = parse_instant("end_date", end)?;
        }
        if let Some(limit) = update.usage_limit {
            self.usage_limit = limit;
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        // A server-side disable is not something the update form can undo.
        if self.status != PromotionStatus::Disabled {
            self.status = classify(self.start_date, self.end_date, "", now);
        }
        self.updated_at = Some(now);
        Ok(())
    }
}

/// Form-encoded update body mirroring the raw wire fields. Absent fields are
/// left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePromotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
