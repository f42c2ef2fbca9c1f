//! Step 7 slice: monthly tracking records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One month of actual income, spending and investment
///
/// Records are append-only from the journey's point of view; nothing checks
/// that months are unique or in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    /// `YYYY-MM`
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    #[serde(default)]
    pub investment: f64,
    pub net_cash_flow: f64,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}
