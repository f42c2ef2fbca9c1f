//! Recommendation webhook client

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::PlanError;
use super::payload::{PlanRequest, WebhookResponse};
use crate::config::PlanConfig;
use crate::domain::Recommendation;

/// Source of investment recommendations for a user snapshot
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, request: &PlanRequest) -> Result<Recommendation, PlanError>;
}

/// Posts the user snapshot to an HTTP webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    http: Client,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout_ms: Option<u64>) -> Result<Self, PlanError> {
        let url = url.into();
        debug!(%url, ?timeout_ms, "WebhookClient::new: called");
        Ok(Self {
            url,
            http: super::http_client(timeout_ms)?,
        })
    }

    pub fn from_config(config: &PlanConfig) -> Result<Self, PlanError> {
        debug!(?config, "WebhookClient::from_config: called");
        Self::new(config.webhook_url.clone(), config.timeout_ms)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecommendationService for WebhookClient {
    async fn recommend(&self, request: &PlanRequest) -> Result<Recommendation, PlanError> {
        debug!(url = %self.url, "WebhookClient::recommend: called");
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "WebhookClient::recommend: API error");
            return Err(PlanError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: WebhookResponse = response
            .json()
            .await
            .map_err(|e| PlanError::InvalidResponse(e.to_string()))?;
        debug!(has_recommendations = body.recommendations.is_some(), "WebhookClient::recommend: parsed");
        body.recommendations
            .ok_or_else(|| PlanError::InvalidResponse("response has no recommendations".to_string()))
    }
}
