//! Journey domain types
//!
//! One file per slice of the aggregate. JSON field names are camelCase so a
//! persisted journey keeps the same shape across versions of the app.

mod cash_flow;
mod goals;
mod id;
mod journey;
pub mod money;
mod net_worth;
mod protection;
mod recommendation;
mod risk;
mod step;
mod tracking;

pub use cash_flow::{CashFlow, EXPENSE_CATEGORIES, total_expenses};
pub use goals::{
    DEFAULT_PRIORITY, FinancialGoal, GOAL_CATEGORIES, Goals, MAX_PRIORITY, MIN_PRIORITY, sorted_by_priority,
};
pub use id::generate_id;
pub use journey::{DEFAULT_AGE, Journey, UserProfile};
pub use net_worth::{ASSET_CATEGORIES, LIABILITY_CATEGORIES, LineItem, NetWorth, sum_amounts};
pub use protection::{
    CYBER_QUESTIONS, CyberLevel, CyberQuestion, INSURANCE_TYPES, InsuranceType, MAX_EMERGENCY_MONTHS,
    MIN_EMERGENCY_MONTHS, WealthProtection, cyber_score, protection_score,
};
pub use recommendation::{Holding, MutualFund, Recommendation};
pub use risk::{
    CAPACITY_QUESTIONS, NEUTRAL_SCORE, RiskAssessment, RiskCategory, RiskOption, RiskProfile, RiskQuestion,
    TOLERANCE_QUESTIONS, category_score,
};
pub use step::Step;
pub use tracking::TrackingRecord;
