//! Step 2 slice: assets and liabilities

use serde::{Deserialize, Serialize};

use super::id::generate_id;

pub const ASSET_CATEGORIES: &[&str] = &[
    "Cash & Savings",
    "Real Estate",
    "Vehicles",
    "Investments",
    "Retirement Accounts",
    "Jewelry & Valuables",
    "Business",
    "Other",
];

pub const LIABILITY_CATEGORIES: &[&str] = &[
    "Mortgage",
    "Car Loan",
    "Personal Loan",
    "Credit Card Debt",
    "Student Loan",
    "Business Loan",
    "Other",
];

/// A named asset or liability amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

impl LineItem {
    /// Create an item with a freshly generated ID
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetWorth {
    pub assets: Vec<LineItem>,
    pub liabilities: Vec<LineItem>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
}

impl NetWorth {
    /// Build a net worth slice, deriving both totals and the difference
    pub fn from_items(assets: Vec<LineItem>, liabilities: Vec<LineItem>) -> Self {
        let total_assets = sum_amounts(&assets);
        let total_liabilities = sum_amounts(&liabilities);
        Self {
            assets,
            liabilities,
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }
}

pub fn sum_amounts(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_items() {
        let net_worth = NetWorth::from_items(
            vec![LineItem::new("House", 300_000.0), LineItem::new("Savings", 50_000.0)],
            vec![LineItem::new("Mortgage", 200_000.0)],
        );
        assert_eq!(net_worth.total_assets, 350_000.0);
        assert_eq!(net_worth.total_liabilities, 200_000.0);
        assert_eq!(net_worth.net_worth, 150_000.0);
    }

    #[test]
    fn test_negative_net_worth() {
        let net_worth = NetWorth::from_items(vec![], vec![LineItem::new("Card", 1_200.0)]);
        assert_eq!(net_worth.net_worth, -1_200.0);
    }

    #[test]
    fn test_json_shape() {
        let net_worth = NetWorth::from_items(vec![LineItem::new("Car", 10.0)], vec![]);
        let json = serde_json::to_value(&net_worth).unwrap();
        assert_eq!(json["assets"][0]["name"], "Car");
        assert_eq!(json["totalAssets"], 10.0);
        assert_eq!(json["netWorth"], 10.0);
    }
}
