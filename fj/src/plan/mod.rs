//! Step 6: investment plan
//!
//! The plan comes from an external recommendation webhook. When the webhook
//! fails, a deterministic plan built from the risk tolerance is used instead
//! (configurable). A separate local proxy can explain the current plan in
//! plain language.

mod error;
mod explain;
mod fallback;
mod payload;
mod planner;
mod webhook;

pub use error::{ExplainError, PlanError};
pub use explain::{ExplainClient, ExplainService, UNAVAILABLE_EXPLANATION};
pub use fallback::fallback_recommendation;
pub use payload::{ExplainRequest, ExplainSnapshot, PlanRequest, UserSnapshot};
pub use planner::{PlanOutcome, PlanSource, Planner};
pub use webhook::{RecommendationService, WebhookClient};

use std::time::Duration;

use reqwest::Client;

/// Build an HTTP client, with a request timeout only when one is configured
fn http_client(timeout_ms: Option<u64>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("finjourney/", env!("CARGO_PKG_VERSION")));
    if let Some(ms) = timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    builder.build()
}
