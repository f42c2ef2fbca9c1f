//! Locally built plan used when the webhook is unavailable

use crate::domain::{Holding, Journey, MutualFund, Recommendation};

fn fund(name: &str, fund_type: &str, allocation: f64, risk_level: &str) -> MutualFund {
    MutualFund {
        name: name.to_string(),
        fund_type: fund_type.to_string(),
        allocation,
        risk_level: risk_level.to_string(),
    }
}

fn holding(name: &str, allocation: f64, reasoning: &str) -> Holding {
    Holding {
        name: name.to_string(),
        allocation,
        reasoning: reasoning.to_string(),
    }
}

/// Deterministic plan driven by risk tolerance
///
/// Equity/debt split is 70/30 above 6, 50/50 above 4, otherwise 30/70.
/// Crypto gets 5% only above 7. The emergency fund covers the chosen number
/// of months of total expenses.
pub fn fallback_recommendation(journey: &Journey) -> Recommendation {
    let tolerance = journey.risk_assessment.risk_tolerance;
    let growth = tolerance > 6;

    let (equity, debt) = if tolerance > 6 {
        (70.0, 30.0)
    } else if tolerance > 4 {
        (50.0, 50.0)
    } else {
        (30.0, 70.0)
    };

    Recommendation {
        equity_allocation: equity,
        debt_allocation: debt,
        mutual_funds: vec![
            fund("Large Cap Equity Fund", "Equity", if growth { 30.0 } else { 15.0 }, "Medium"),
            fund("Mid Cap Growth Fund", "Equity", if growth { 25.0 } else { 10.0 }, "High"),
            fund("Debt Fund", "Debt", if growth { 20.0 } else { 40.0 }, "Low"),
        ],
        commodities: vec![holding("Gold", 10.0, "Hedge against inflation and market volatility")],
        cryptocurrency: vec![holding(
            "Bitcoin",
            if tolerance > 7 { 5.0 } else { 0.0 },
            "High-risk, high-reward asset for diversification",
        )],
        emergency_fund: journey.cash_flow.total_expenses * f64::from(journey.wealth_protection.emergency_fund_months),
        investment_strategy: format!(
            "Based on your {} risk profile, we recommend a balanced approach with emphasis on {}.",
            journey.risk_assessment.overall_risk_profile,
            if growth { "growth" } else { "stability" }
        ),
    }
}
