//! Step 1 slice: monthly income and expenses

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Expense categories offered when adding an expense
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Food & Groceries",
    "Transportation",
    "Utilities",
    "Insurance",
    "Healthcare",
    "Entertainment",
    "Education",
    "Savings",
    "Other",
];

/// Monthly cash flow
///
/// `total_expenses` and `net_cash_flow` are derived when the form is saved and
/// are not re-checked against the expense map afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashFlow {
    pub monthly_income: f64,
    pub monthly_expenses: BTreeMap<String, f64>,
    pub total_expenses: f64,
    pub net_cash_flow: f64,
}

impl CashFlow {
    /// Build a cash flow slice, deriving the totals
    pub fn from_parts(monthly_income: f64, monthly_expenses: BTreeMap<String, f64>) -> Self {
        let total_expenses = total_expenses(&monthly_expenses);
        Self {
            monthly_income,
            net_cash_flow: monthly_income - total_expenses,
            monthly_expenses,
            total_expenses,
        }
    }
}

/// Sum of every category amount
pub fn total_expenses(expenses: &BTreeMap<String, f64>) -> f64 {
    expenses.values().sum()
}
