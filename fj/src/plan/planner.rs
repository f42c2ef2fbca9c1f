//! Plan generation and explanation flows

use tracing::{debug, info, warn};

use super::error::{ExplainError, PlanError};
use super::explain::ExplainService;
use super::fallback::fallback_recommendation;
use super::payload::{ExplainRequest, ExplainSnapshot, PlanRequest};
use super::webhook::RecommendationService;
use crate::completeness::first_incomplete;
use crate::config::PlanConfig;
use crate::domain::Journey;
use crate::notice::Notice;
use crate::store::{JourneyStore, Storage};

/// Where the current plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Webhook,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub source: PlanSource,
    pub notice: Notice,
    /// Why the webhook was bypassed, for fallback plans
    pub fallback_reason: Option<String>,
}

/// Drives the plan step against a recommendation service
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    fallback_on_error: bool,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Planner {
    pub fn new(fallback_on_error: bool) -> Self {
        Self { fallback_on_error }
    }

    pub fn from_config(config: &PlanConfig) -> Self {
        Self::new(config.fallback_on_error)
    }

    /// Generate a plan and store it
    ///
    /// Steps 1-5 must be complete; otherwise nothing is sent and the first
    /// missing step is reported. Webhook failures fall back to a locally built
    /// plan unless fallback is disabled.
    pub async fn generate<S: Storage>(
        &self,
        store: &mut JourneyStore<S>,
        service: &dyn RecommendationService,
    ) -> Result<PlanOutcome, PlanError> {
        debug!(fallback_on_error = self.fallback_on_error, "Planner::generate: called");
        if let Some(step) = first_incomplete(store.journey()) {
            debug!(%step, "Planner::generate: prerequisite missing");
            return Err(PlanError::Incomplete { step });
        }

        let request = PlanRequest::from_journey(store.journey());
        let outcome = match service.recommend(&request).await {
            Ok(recommendation) => {
                info!(equity = recommendation.equity_allocation, "Plan generated by webhook");
                store.set_recommendations(Some(recommendation));
                PlanOutcome {
                    source: PlanSource::Webhook,
                    notice: Notice::success("Financial plan generated successfully!"),
                    fallback_reason: None,
                }
            }
            Err(e) if self.fallback_on_error => {
                warn!(error = %e, "Recommendation webhook failed, using fallback plan");
                let recommendation = fallback_recommendation(store.journey());
                store.set_recommendations(Some(recommendation));
                PlanOutcome {
                    source: PlanSource::Fallback,
                    notice: Notice::success("Demo plan generated (recommendation webhook unavailable)"),
                    fallback_reason: Some(e.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Recommendation webhook failed");
                return Err(e);
            }
        };

        store.persist()?;
        Ok(outcome)
    }

    /// Ask the explanation service to describe the stored plan
    pub async fn explain(&self, journey: &Journey, service: &dyn ExplainService) -> Result<String, ExplainError> {
        debug!("Planner::explain: called");
        let Some(recommendations) = journey.recommendations.clone() else {
            debug!("Planner::explain: no plan yet");
            return Err(ExplainError::NoPlan);
        };

        let request = ExplainRequest {
            user_data: ExplainSnapshot::from_journey(journey),
            recommendations,
        };
        let explanation = service.explain(&request).await?;
        info!(len = explanation.len(), "Plan explanation received");
        Ok(explanation)
    }
}
