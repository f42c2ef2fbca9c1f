//! Form validation errors
//!
//! These are validation gaps shown to the user; the edit is simply not applied.

use thiserror::Error;

use crate::domain::RiskCategory;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Expense category is required")]
    MissingCategory,

    #[error("Expense amount is required")]
    MissingAmount,

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} name is required")]
    MissingName(&'static str),

    #[error("No {kind} with id {id}")]
    UnknownItem { kind: &'static str, id: String },

    #[error("Goal {0} is required")]
    MissingGoalField(&'static str),

    #[error("Please answer all {expected} {category} questions ({answered} answered)")]
    UnansweredRisk {
        category: RiskCategory,
        answered: usize,
        expected: usize,
    },

    #[error("{category} has {expected} questions but {given} answers were given")]
    TooManyAnswers {
        category: RiskCategory,
        given: usize,
        expected: usize,
    },

    #[error("Unknown {category} question {id}")]
    UnknownQuestion { category: RiskCategory, id: u8 },

    #[error("Score {score} is not an option for {category} question {id}")]
    InvalidScore { category: RiskCategory, id: u8, score: u32 },

    #[error("Unknown cyber-security item {0}")]
    UnknownCyberItem(u8),

    #[error("Unknown insurance type '{0}'")]
    UnknownInsurance(String),

    #[error("Please fill in income and expenses")]
    MissingTrackingAmounts,

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}
