//! Monthly tracking entries and their summary

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::domain::TrackingRecord;
use crate::domain::money::js_round;
use crate::forms::{FormError, finite};

/// A month of actuals as entered, before it is stamped and stored
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEntry {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub investment: f64,
    pub notes: String,
}

impl TrackingEntry {
    /// Validate raw input into an entry
    ///
    /// Income and expenses are required. `month` defaults to the current month and
    /// must look like `YYYY-MM`; investment defaults to zero.
    pub fn new(
        month: Option<String>,
        income: Option<f64>,
        expenses: Option<f64>,
        investment: Option<f64>,
        notes: Option<String>,
    ) -> Result<Self, FormError> {
        debug!(?month, ?income, ?expenses, "TrackingEntry::new: called");
        let (Some(income), Some(expenses)) = (income, expenses) else {
            return Err(FormError::MissingTrackingAmounts);
        };

        let income = finite("Income", income)?;
        let expenses = finite("Expenses", expenses)?;
        let investment = finite("Investment", investment.unwrap_or(0.0))?;

        let month = month.unwrap_or_else(current_month);
        if NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_err() {
            return Err(FormError::InvalidMonth(month));
        }

        Ok(Self {
            month,
            income,
            expenses,
            investment,
            notes: notes.unwrap_or_default(),
        })
    }

    pub fn net_cash_flow(&self) -> f64 {
        self.income - self.expenses
    }

    /// Stamp the entry into a stored record
    pub fn into_record(self, timestamp: DateTime<Utc>) -> TrackingRecord {
        TrackingRecord {
            net_cash_flow: self.net_cash_flow(),
            month: self.month,
            income: self.income,
            expenses: self.expenses,
            investment: self.investment,
            notes: self.notes,
            timestamp,
        }
    }
}

/// Current month as `YYYY-MM` (UTC)
pub fn current_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

/// Averages and totals over the tracking history
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingSummary<'a> {
    /// `(history index, record)`, most recent month first
    pub records: Vec<(usize, &'a TrackingRecord)>,
    pub average_income: f64,
    pub average_expenses: f64,
    pub total_invested: f64,
}

impl<'a> TrackingSummary<'a> {
    pub fn from_history(history: &'a [TrackingRecord]) -> Self {
        let mut records: Vec<(usize, &TrackingRecord)> = history.iter().enumerate().collect();
        records.sort_by(|(_, a), (_, b)| b.month.cmp(&a.month));

        let count = history.len() as f64;
        let (average_income, average_expenses) = if history.is_empty() {
            (0.0, 0.0)
        } else {
            (
                js_round(history.iter().map(|r| r.income).sum::<f64>() / count),
                js_round(history.iter().map(|r| r.expenses).sum::<f64>() / count),
            )
        };

        Self {
            records,
            average_income,
            average_expenses,
            total_invested: history.iter().map(|r| r.investment).sum(),
        }
    }

    /// History index of the record shown at 1-based display `position`
    pub fn index_at(&self, position: usize) -> Option<usize> {
        self.records.get(position.checked_sub(1)?).map(|(index, _)| *index)
    }
}
