//! Step 1 form

use std::collections::BTreeMap;

use tracing::debug;

use super::{FormError, finite};
use crate::domain::money::parse_amount;
use crate::domain::{CashFlow, total_expenses};

#[derive(Debug, Clone, Default)]
pub struct CashFlowForm {
    monthly_income: f64,
    expenses: BTreeMap<String, f64>,
}

impl CashFlowForm {
    pub fn from_slice(cash_flow: &CashFlow) -> Self {
        Self {
            monthly_income: cash_flow.monthly_income,
            expenses: cash_flow.monthly_expenses.clone(),
        }
    }

    pub fn set_income(&mut self, amount: f64) -> Result<(), FormError> {
        debug!(amount, "CashFlowForm::set_income: called");
        self.monthly_income = finite("Income", amount)?;
        Ok(())
    }

    /// Overwrite (or create) one category amount
    pub fn set_expense(&mut self, category: impl Into<String>, amount: f64) -> Result<(), FormError> {
        self.expenses.insert(category.into(), finite("Expense amount", amount)?);
        Ok(())
    }

    /// Add an expense from raw input; both fields must be non-empty
    pub fn add_expense(&mut self, category: &str, amount: &str) -> Result<(), FormError> {
        debug!(%category, %amount, "CashFlowForm::add_expense: called");
        let category = category.trim();
        if category.is_empty() {
            return Err(FormError::MissingCategory);
        }
        if amount.trim().is_empty() {
            return Err(FormError::MissingAmount);
        }
        self.set_expense(category, parse_amount(amount))
    }

    /// Drop a category entirely; returns false if it was not present
    pub fn remove_expense(&mut self, category: &str) -> bool {
        debug!(%category, "CashFlowForm::remove_expense: called");
        self.expenses.remove(category).is_some()
    }

    pub fn income(&self) -> f64 {
        self.monthly_income
    }

    pub fn expenses(&self) -> &BTreeMap<String, f64> {
        &self.expenses
    }

    pub fn total_expenses(&self) -> f64 {
        total_expenses(&self.expenses)
    }

    pub fn net_cash_flow(&self) -> f64 {
        self.monthly_income - self.total_expenses()
    }

    pub fn save(&self) -> CashFlow {
        CashFlow::from_parts(self.monthly_income, self.expenses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_running_totals() {
        let mut form = CashFlowForm::default();
        form.set_income(50_000.0).unwrap();
        form.add_expense("Housing", "20000").unwrap();
        form.add_expense("Food", "10000").unwrap();

        assert_eq!(form.total_expenses(), 30_000.0);
        assert_eq!(form.net_cash_flow(), 20_000.0);

        let saved = form.save();
        assert_eq!(saved.total_expenses, 30_000.0);
        assert_eq!(saved.net_cash_flow, 20_000.0);
    }

    #[test]
    fn test_remove_deletes_key() {
        let mut form = CashFlowForm::default();
        form.set_expense("Housing", 100.0).unwrap();
        form.set_expense("Food", 50.0).unwrap();

        assert!(form.remove_expense("Food"));
        assert!(!form.expenses().contains_key("Food"));
        assert_eq!(form.total_expenses(), 100.0);
        assert!(!form.remove_expense("Food"));
    }

    #[test]
    fn test_add_requires_both_fields() {
        let mut form = CashFlowForm::default();
        assert!(matches!(form.add_expense("  ", "10"), Err(FormError::MissingCategory)));
        assert!(matches!(form.add_expense("Food", ""), Err(FormError::MissingAmount)));
        assert!(form.expenses().is_empty());
    }

    #[test]
    fn test_unparseable_amount_is_zero() {
        let mut form = CashFlowForm::default();
        form.add_expense("Other", "lots").unwrap();
        assert_eq!(form.expenses()["Other"], 0.0);
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let mut form = CashFlowForm::default();
        form.set_income(1_000.0).unwrap();
        assert!(matches!(form.set_income(f64::INFINITY), Err(FormError::NotFinite("Income"))));
        assert!(matches!(form.set_expense("Rent", f64::NAN), Err(FormError::NotFinite(_))));
        assert_eq!(form.income(), 1_000.0);
        assert!(form.expenses().is_empty());

        form.add_expense("Rent", "inf").unwrap();
        assert_eq!(form.expenses()["Rent"], 0.0);
    }

    #[test]
    fn test_same_category_overwrites() {
        let mut form = CashFlowForm::default();
        form.add_expense("Food", "10").unwrap();
        form.add_expense("Food", "25").unwrap();
        assert_eq!(form.total_expenses(), 25.0);
    }

    #[test]
    fn test_seeded_from_slice() {
        let slice = CashFlow::from_parts(900.0, BTreeMap::from([("Rent".to_string(), 400.0)]));
        let form = CashFlowForm::from_slice(&slice);
        assert_eq!(form.income(), 900.0);
        assert_eq!(form.save(), slice);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_categories(amounts in proptest::collection::btree_map("[a-z]{1,8}", 0u32..1_000_000, 0..12), income in 0u32..10_000_000) {
            let mut form = CashFlowForm::default();
            form.set_income(f64::from(income)).unwrap();
            for (category, amount) in &amounts {
                form.set_expense(category.clone(), f64::from(*amount)).unwrap();
            }
            let expected: f64 = amounts.values().map(|a| f64::from(*a)).sum();
            prop_assert_eq!(form.total_expenses(), expected);
            prop_assert_eq!(form.net_cash_flow(), f64::from(income) - expected);

            if let Some(category) = amounts.keys().next() {
                let removed = f64::from(amounts[category]);
                form.remove_expense(category);
                prop_assert_eq!(form.total_expenses(), expected - removed);
            }
        }
    }
}
