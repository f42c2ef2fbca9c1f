//! Step 6 slice: investment recommendation
//!
//! Produced by the recommendation webhook or by the local fallback, never by
//! rules in this crate. Every field tolerates absence so partial webhook
//! responses still deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MutualFund {
    pub name: String,
    #[serde(rename = "type")]
    pub fund_type: String,
    pub allocation: f64,
    pub risk_level: String,
}

/// A commodity or crypto position with its rationale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Holding {
    pub name: String,
    pub allocation: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendation {
    /// Percent of the portfolio in equity
    pub equity_allocation: f64,
    /// Percent of the portfolio in debt
    pub debt_allocation: f64,
    pub mutual_funds: Vec<MutualFund>,
    pub commodities: Vec<Holding>,
    pub cryptocurrency: Vec<Holding>,
    pub emergency_fund: f64,
    pub investment_strategy: String,
}
