//! Step 8: financial dashboard
//!
//! Read-only. Everything here is derived from the journey on demand and
//! nothing is written back.

use std::fmt;

use serde::Serialize;

use crate::domain::Journey;
use crate::domain::money::percent_of;

/// Savings rate verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SavingsHealth {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SavingsHealth {
    pub fn from_rate(rate: i64) -> Self {
        if rate >= 20 {
            Self::Excellent
        } else if rate >= 10 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for SavingsHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::NeedsImprovement => write!(f, "Needs improvement"),
        }
    }
}

/// Debt-to-asset verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebtHealth {
    Healthy,
    Moderate,
    High,
}

impl DebtHealth {
    pub fn from_ratio(ratio: i64) -> Self {
        if ratio <= 30 {
            Self::Healthy
        } else if ratio <= 50 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl fmt::Display for DebtHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Sign of a balance; zero counts as positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Balance {
    Positive,
    Negative,
}

impl Balance {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { Self::Positive } else { Self::Negative }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowPoint {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthPoint {
    pub month: String,
    pub net_worth: f64,
}

/// Label used for the single point shown before any tracking exists
pub const CURRENT_LABEL: &str = "Current";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub net_cash_flow: f64,
    /// Percent of income kept, 0 without income
    pub savings_rate: i64,
    /// Liabilities as a percent of assets, 0 without assets
    pub debt_to_asset_ratio: i64,
    pub equity_to_asset_ratio: i64,
    pub expense_breakdown: Vec<(String, f64)>,
    pub cash_flow_series: Vec<CashFlowPoint>,
    pub net_worth_series: Vec<NetWorthPoint>,
    pub equity_allocation: f64,
    pub debt_allocation: f64,
    pub savings_health: SavingsHealth,
    pub debt_health: DebtHealth,
    pub cash_flow_balance: Balance,
    pub net_worth_balance: Balance,
}

impl StatusReport {
    pub fn from_journey(journey: &Journey) -> Self {
        let cash_flow = &journey.cash_flow;
        let net_worth = &journey.net_worth;
        let history = &journey.tracking_history;

        let savings_rate = percent_of(cash_flow.net_cash_flow, cash_flow.monthly_income);
        let debt_to_asset_ratio = percent_of(net_worth.total_liabilities, net_worth.total_assets);

        let cash_flow_series = if history.is_empty() {
            vec![CashFlowPoint {
                month: CURRENT_LABEL.to_string(),
                income: cash_flow.monthly_income,
                expenses: cash_flow.total_expenses,
                savings: cash_flow.net_cash_flow,
            }]
        } else {
            history
                .iter()
                .map(|r| CashFlowPoint {
                    month: r.month.clone(),
                    income: r.income,
                    expenses: r.expenses,
                    savings: r.net_cash_flow,
                })
                .collect()
        };

        // Only the current figure is known; every month gets it.
        let net_worth_series = if history.is_empty() {
            vec![NetWorthPoint {
                month: CURRENT_LABEL.to_string(),
                net_worth: net_worth.net_worth,
            }]
        } else {
            history
                .iter()
                .map(|r| NetWorthPoint {
                    month: r.month.clone(),
                    net_worth: net_worth.net_worth,
                })
                .collect()
        };

        let (equity_allocation, debt_allocation) = journey
            .recommendations
            .as_ref()
            .map(|r| (r.equity_allocation, r.debt_allocation))
            .unwrap_or((50.0, 50.0));

        Self {
            net_worth: net_worth.net_worth,
            total_assets: net_worth.total_assets,
            total_liabilities: net_worth.total_liabilities,
            monthly_income: cash_flow.monthly_income,
            monthly_expenses: cash_flow.total_expenses,
            net_cash_flow: cash_flow.net_cash_flow,
            savings_rate,
            debt_to_asset_ratio,
            equity_to_asset_ratio: 100 - debt_to_asset_ratio,
            expense_breakdown: cash_flow
                .monthly_expenses
                .iter()
                .map(|(category, amount)| (category.clone(), *amount))
                .collect(),
            cash_flow_series,
            net_worth_series,
            equity_allocation,
            debt_allocation,
            savings_health: SavingsHealth::from_rate(savings_rate),
            debt_health: DebtHealth::from_ratio(debt_to_asset_ratio),
            cash_flow_balance: Balance::of(cash_flow.net_cash_flow),
            net_worth_balance: Balance::of(net_worth.net_worth),
        }
    }
}
