//! Plan and explanation error types

use thiserror::Error;

use crate::domain::Step;
use crate::store::StoreError;

/// Errors from plan generation
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Please complete {step}")]
    Incomplete { step: Step },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlanError {
    /// A prerequisite step is missing; nothing was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, PlanError::Incomplete { .. })
    }

    /// The webhook was unreachable or answered badly
    pub fn is_integration(&self) -> bool {
        matches!(
            self,
            PlanError::ApiError { .. } | PlanError::Network(_) | PlanError::InvalidResponse(_) | PlanError::Json(_)
        )
    }
}

/// Errors from the local explanation proxy
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("Generate your plan first, then ask Local AI to explain it.")]
    NoPlan,

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ExplainError {
    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ExplainError::NoPlan => self.to_string(),
            _ => "Local AI is not available. Is Ollama + proxy server running?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message_names_step() {
        let err = PlanError::Incomplete {
            step: Step::CashFlow,
        };
        assert_eq!(err.to_string(), "Please complete Step 1: Cash Flow");
        assert!(err.is_validation());
    }

    #[test]
    fn test_api_error_is_integration() {
        let err = PlanError::ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(err.is_integration());
        assert_eq!(err.to_string(), "API error 500: boom");
    }

    #[test]
    fn test_explain_user_message() {
        assert_eq!(
            ExplainError::NoPlan.user_message(),
            "Generate your plan first, then ask Local AI to explain it."
        );
        let err = ExplainError::InvalidResponse("x".to_string());
        assert!(err.user_message().contains("Local AI is not available"));
    }
}
