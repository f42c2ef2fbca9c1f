//! Local explanation proxy client

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::ExplainError;
use super::payload::{ExplainRequest, ExplainResponse};
use crate::config::ExplainConfig;

/// Shown when the proxy answers without an explanation
pub const UNAVAILABLE_EXPLANATION: &str = "Local AI response not available.";

/// Turns a plan into a plain-language explanation
#[async_trait]
pub trait ExplainService: Send + Sync {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ExplainError>;
}

#[derive(Debug, Clone)]
pub struct ExplainClient {
    url: String,
    http: Client,
}

impl ExplainClient {
    pub fn new(url: impl Into<String>, timeout_ms: Option<u64>) -> Result<Self, ExplainError> {
        let url = url.into();
        debug!(%url, ?timeout_ms, "ExplainClient::new: called");
        Ok(Self {
            url,
            http: super::http_client(timeout_ms)?,
        })
    }

    pub fn from_config(config: &ExplainConfig) -> Result<Self, ExplainError> {
        Self::new(config.url.clone(), config.timeout_ms)
    }
}

#[async_trait]
impl ExplainService for ExplainClient {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ExplainError> {
        debug!(url = %self.url, "ExplainClient::explain: called");
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "ExplainClient::explain: API error");
            return Err(ExplainError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ExplainResponse = response
            .json()
            .await
            .map_err(|e| ExplainError::InvalidResponse(e.to_string()))?;
        Ok(body
            .explanation
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| UNAVAILABLE_EXPLANATION.to_string()))
    }
}
