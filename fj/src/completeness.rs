//! Step completeness checks
//!
//! Presence checks only: a step counts as complete once its slice holds
//! something, without re-validating the values.

use crate::domain::{CashFlow, Goals, Journey, NetWorth, RiskAssessment, Step, WealthProtection};

/// Steps that must be complete before a plan can be generated
pub const PLAN_PREREQUISITES: [Step; 5] = [
    Step::CashFlow,
    Step::NetWorth,
    Step::Goals,
    Step::RiskAssessment,
    Step::Protection,
];

pub fn cash_flow_complete(cash_flow: &CashFlow) -> bool {
    cash_flow.monthly_income != 0.0
}

pub fn net_worth_complete(net_worth: &NetWorth) -> bool {
    !net_worth.assets.is_empty() || !net_worth.liabilities.is_empty()
}

pub fn goals_complete(goals: &Goals) -> bool {
    !goals.goals.is_empty()
}

pub fn risk_complete(risk: &RiskAssessment) -> bool {
    risk.risk_tolerance != 0
}

pub fn protection_complete(protection: &WealthProtection) -> bool {
    protection.cyber_awareness != 0
}

/// Whether `step` has been completed in `journey`
///
/// Plan is complete once a recommendation exists, Track once a record exists;
/// Status is a read-only view and always complete.
pub fn is_complete(journey: &Journey, step: Step) -> bool {
    match step {
        Step::CashFlow => cash_flow_complete(&journey.cash_flow),
        Step::NetWorth => net_worth_complete(&journey.net_worth),
        Step::Goals => goals_complete(&journey.goals),
        Step::RiskAssessment => risk_complete(&journey.risk_assessment),
        Step::Protection => protection_complete(&journey.wealth_protection),
        Step::Plan => journey.recommendations.is_some(),
        Step::Track => !journey.tracking_history.is_empty(),
        Step::Status => true,
    }
}

/// First plan prerequisite that is not complete yet
pub fn first_incomplete(journey: &Journey) -> Option<Step> {
    PLAN_PREREQUISITES
        .into_iter()
        .find(|step| !is_complete(journey, *step))
}
