use reqwest::Client;

use crate::config::PromotionsApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AckResponse, StatusSummaryData, StatusSummaryResponse, UpdatePromotion};

/// Thin client over the remote promotions API. Auth is a bearer token owned
/// by the session layer and handed in through config.
pub struct PromotionsApi {
    client: Client,
    config: PromotionsApiConfig,
}

impl PromotionsApi {
    pub fn new(config: PromotionsApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.token)
    }

    /// Fetches the status-grouped promotion summary for the current vendor.
    pub async fn fetch_status_summary(&self) -> AppResult<StatusSummaryData> {
        let url = format!("{}/promotions/status-summary", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "status-summary request failed: HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let summary: StatusSummaryResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("status-summary: {e}")))?;

        if !summary.status {
            return Err(AppError::ExternalApiError(
                "status-summary request rejected by server".to_string(),
            ));
        }

        summary.data.ok_or_else(|| {
            AppError::MalformedResponse("status-summary response carried no data".to_string())
        })
    }

    pub async fn delete_promotion(&self, id: &str) -> AppResult<()> {
        let url = format!("{}/promotions/{}", self.config.base_url, id);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "delete promotion {id} failed: HTTP {}",
                response.status()
            )));
        }

        let ack: AckResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("delete ack: {e}")))?;

        if !ack.ok {
            return Err(AppError::ExternalApiError(format!(
                "server refused to delete promotion {id}"
            )));
        }

        log::info!("deleted promotion {id}");
        Ok(())
    }

    pub async fn update_promotion(&self, id: &str, update: &UpdatePromotion) -> AppResult<()> {
        let url = format!("{}/promotions/{}", self.config.base_url, id);

        let response = self
            .client
            .patch(&url)
            .header("Authorization", self.bearer())
            .form(update)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "update promotion {id} failed: HTTP {}",
                response.status()
            )));
        }

        let ack: AckResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("update ack: {e}")))?;

        if !ack.ok {
            return Err(AppError::ExternalApiError(format!(
                "server refused to update promotion {id}"
            )));
        }

        log::info!("updated promotion {id}");
        Ok(())
    }
}
