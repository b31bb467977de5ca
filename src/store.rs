//! In-memory promotion list for the current vendor: one load per refresh,
//! filtered/searched/paginated views on top.

use chrono::Utc;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::external::PromotionsApi;
use crate::models::{Promotion, UpdatePromotion, page_slice};
use crate::status::PromotionStatus;

/// UI tab selecting one lifecycle bucket. Disabled promotions only surface
/// under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Upcoming,
    Expired,
}

impl StatusFilter {
    fn matches(self, status: PromotionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == PromotionStatus::Active,
            StatusFilter::Upcoming => status == PromotionStatus::Upcoming,
            StatusFilter::Expired => status == PromotionStatus::Expired,
        }
    }
}

/// Tab badge counts, tallied from the derived statuses of the loaded list so
/// badges can never drift from the rows within one load cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PromotionStats {
    pub all: usize,
    pub active: usize,
    pub upcoming: usize,
    pub expired: usize,
}

pub fn compute_stats(promotions: &[Promotion]) -> PromotionStats {
    let mut stats = PromotionStats {
        all: promotions.len(),
        ..Default::default()
    };
    for promotion in promotions {
        match promotion.status {
            PromotionStatus::Active => stats.active += 1,
            PromotionStatus::Upcoming => stats.upcoming += 1,
            PromotionStatus::Expired => stats.expired += 1,
            PromotionStatus::Disabled => {}
        }
    }
    stats
}

pub struct PromotionStore {
    api: PromotionsApi,
    promotions: Vec<Promotion>,
    stats: PromotionStats,
    // Load generation counter. A response is only applied when no newer
    // load() has started since it was issued.
    latest_load: u64,
}

impl PromotionStore {
    pub fn new(api: PromotionsApi) -> Self {
        Self {
            api,
            promotions: Vec::new(),
            stats: PromotionStats::default(),
            latest_load: 0,
        }
    }

    /// Replaces the list with a fresh fetch from the remote API. Every record
    /// is classified against the wall clock captured once at load time. On
    /// failure the prior list stays untouched; retry is up to the caller.
    pub async fn load(&mut self) -> AppResult<()> {
        let generation = self.begin_load();
        let data = self.api.fetch_status_summary().await?;
        let now = Utc::now();

        let promotions = data
            .all
            .all_discounts
            .into_iter()
            .map(|raw| Promotion::from_raw(raw, now))
            .collect::<AppResult<Vec<_>>>()?;

        if data.all.count != promotions.len() as i64 {
            log::warn!(
                "server reported {} promotions but sent {}",
                data.all.count,
                promotions.len()
            );
        }

        if self.apply_snapshot(generation, promotions) {
            log::info!(
                "loaded {} promotions ({} active, {} upcoming, {} expired)",
                self.stats.all,
                self.stats.active,
                self.stats.upcoming,
                self.stats.expired
            );
        } else {
            log::debug!("discarded stale load response (generation {generation})");
        }
        Ok(())
    }

    fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.latest_load
    }

    fn apply_snapshot(&mut self, generation: u64, promotions: Vec<Promotion>) -> bool {
        if generation != self.latest_load {
            return false;
        }
        self.stats = compute_stats(&promotions);
        self.promotions = promotions;
        true
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn stats(&self) -> PromotionStats {
        self.stats
    }

    pub fn filter_by_tab(&self, tab: StatusFilter) -> Vec<&Promotion> {
        self.promotions
            .iter()
            .filter(|p| tab.matches(p.status))
            .collect()
    }

    /// The rows a listing page renders: tab filter, then name search, then a
    /// 1-indexed page slice.
    pub fn page_view(
        &self,
        tab: StatusFilter,
        search: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Vec<Promotion> {
        let filtered: Vec<Promotion> = self
            .promotions
            .iter()
            .filter(|p| tab.matches(p.status))
            .filter(|p| matches_search(p, search))
            .cloned()
            .collect();
        page_slice(&filtered, page, page_size)
    }

    /// Deletes a promotion remotely and, only once the server confirms,
    /// drops it from the local list.
    pub async fn remove(&mut self, id: &str) -> AppResult<()> {
        if !self.promotions.iter().any(|p| p.id == id) {
            return Err(AppError::NotFound(format!("promotion {id}")));
        }

        self.api.delete_promotion(id).await?;

        self.promotions.retain(|p| p.id != id);
        self.stats = compute_stats(&self.promotions);
        Ok(())
    }

    /// Pushes an update to the server and patches the local record once it
    /// is accepted, re-deriving its status.
    pub async fn update(&mut self, id: &str, update: &UpdatePromotion) -> AppResult<()> {
        if let Some(value) = update.discount_value
            && value < 0.0
        {
            return Err(AppError::ValidationError(
                "discount value must be non-negative".to_string(),
            ));
        }

        let index = self
            .promotions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("promotion {id}")))?;

        self.api.update_promotion(id, update).await?;

        self.promotions[index].apply_update(update, Utc::now())?;
        self.stats = compute_stats(&self.promotions);
        Ok(())
    }
}

fn matches_search(promotion: &Promotion, search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(term) => {
            let term = term.trim().to_lowercase();
            term.is_empty() || promotion.name.to_lowercase().contains(&term)
        }
    }
}
