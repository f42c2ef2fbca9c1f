//! Request and response bodies for the plan integrations

use serde::{Deserialize, Serialize};

use crate::domain::{FinancialGoal, Journey, Recommendation, RiskProfile};

/// Flattened view of the journey sent to the recommendation webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub risk_tolerance: u32,
    pub risk_capacity: u32,
    pub risk_profile: RiskProfile,
    pub cyber_awareness: u32,
    pub emergency_fund_months: u32,
    pub financial_goals: Vec<FinancialGoal>,
}

impl UserSnapshot {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            age: journey.user_profile.age,
            monthly_income: journey.cash_flow.monthly_income,
            monthly_expenses: journey.cash_flow.total_expenses,
            total_assets: journey.net_worth.total_assets,
            total_liabilities: journey.net_worth.total_liabilities,
            net_worth: journey.net_worth.net_worth,
            risk_tolerance: journey.risk_assessment.risk_tolerance,
            risk_capacity: journey.risk_assessment.risk_capacity,
            risk_profile: journey.risk_assessment.overall_risk_profile,
            cyber_awareness: journey.wealth_protection.cyber_awareness,
            emergency_fund_months: journey.wealth_protection.emergency_fund_months,
            financial_goals: journey.goals.goals.clone(),
        }
    }
}

/// `POST <webhook-url>` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub user_data: UserSnapshot,
}

impl PlanRequest {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            user_data: UserSnapshot::from_journey(journey),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebhookResponse {
    pub recommendations: Option<Recommendation>,
}

/// The subset of the journey sent along with a plan to be explained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainSnapshot {
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub risk_tolerance: u32,
    pub risk_capacity: u32,
    pub risk_profile: RiskProfile,
    pub emergency_fund_months: u32,
}

impl ExplainSnapshot {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            age: journey.user_profile.age,
            monthly_income: journey.cash_flow.monthly_income,
            monthly_expenses: journey.cash_flow.total_expenses,
            total_assets: journey.net_worth.total_assets,
            total_liabilities: journey.net_worth.total_liabilities,
            net_worth: journey.net_worth.net_worth,
            risk_tolerance: journey.risk_assessment.risk_tolerance,
            risk_capacity: journey.risk_assessment.risk_capacity,
            risk_profile: journey.risk_assessment.overall_risk_profile,
            emergency_fund_months: journey.wealth_protection.emergency_fund_months,
        }
    }
}

/// `POST <explain-url>` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub user_data: ExplainSnapshot,
    pub recommendations: Recommendation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExplainResponse {
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CashFlow;
    use std::collections::BTreeMap;

    #[test]
    fn test_plan_request_shape() {
        let mut journey = Journey::default();
        journey.cash_flow = CashFlow::from_parts(50_000.0, BTreeMap::from([("Rent".to_string(), 30_000.0)]));

        let json = serde_json::to_value(PlanRequest::from_journey(&journey)).unwrap();
        let user = &json["userData"];
        assert_eq!(user["age"], 30);
        assert_eq!(user["monthlyIncome"], 50_000.0);
        assert_eq!(user["monthlyExpenses"], 30_000.0);
        assert_eq!(user["riskProfile"], "Moderate");
        assert_eq!(user["cyberAwareness"], 5);
        assert_eq!(user["emergencyFundMonths"], 6);
        assert!(user["financialGoals"].as_array().unwrap().is_empty());
        assert_eq!(user.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_explain_snapshot_omits_goals_and_cyber() {
        let json = serde_json::to_value(ExplainSnapshot::from_journey(&Journey::default())).unwrap();
        assert!(json.get("financialGoals").is_none());
        assert!(json.get("cyberAwareness").is_none());
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
