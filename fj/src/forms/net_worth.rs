//! Step 2 form

use tracing::debug;

use super::{FormError, finite};
use crate::domain::money::parse_amount;
use crate::domain::{LineItem, NetWorth, sum_amounts};

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Asset,
    Liability,
}

impl ItemKind {
    fn label(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NetWorthForm {
    assets: Vec<LineItem>,
    liabilities: Vec<LineItem>,
}

impl NetWorthForm {
    pub fn from_slice(net_worth: &NetWorth) -> Self {
        Self {
            assets: net_worth.assets.clone(),
            liabilities: net_worth.liabilities.clone(),
        }
    }

    fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<LineItem> {
        match kind {
            ItemKind::Asset => &mut self.assets,
            ItemKind::Liability => &mut self.liabilities,
        }
    }

    /// Add an item from raw input; duplicate names are allowed
    pub fn add(&mut self, kind: ItemKind, name: &str, amount: &str) -> Result<&LineItem, FormError> {
        debug!(%kind, %name, %amount, "NetWorthForm::add: called");
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName(match kind {
                ItemKind::Asset => "Asset",
                ItemKind::Liability => "Liability",
            }));
        }
        if amount.trim().is_empty() {
            return Err(FormError::MissingAmount);
        }
        let items = self.items_mut(kind);
        items.push(LineItem::new(name, parse_amount(amount)));
        Ok(&items[items.len() - 1])
    }

    /// Remove every item with `id`
    pub fn remove(&mut self, kind: ItemKind, id: &str) -> Result<(), FormError> {
        debug!(%kind, %id, "NetWorthForm::remove: called");
        let items = self.items_mut(kind);
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(FormError::UnknownItem {
                kind: kind.label(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Change the amount of every item with `id`
    pub fn set_amount(&mut self, kind: ItemKind, id: &str, amount: f64) -> Result<(), FormError> {
        debug!(%kind, %id, amount, "NetWorthForm::set_amount: called");
        let amount = finite("Amount", amount)?;
        let mut found = false;
        for item in self.items_mut(kind).iter_mut().filter(|item| item.id == id) {
            item.amount = amount;
            found = true;
        }
        if !found {
            return Err(FormError::UnknownItem {
                kind: kind.label(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn assets(&self) -> &[LineItem] {
        &self.assets
    }

    pub fn liabilities(&self) -> &[LineItem] {
        &self.liabilities
    }

    pub fn total_assets(&self) -> f64 {
        sum_amounts(&self.assets)
    }

    pub fn total_liabilities(&self) -> f64 {
        sum_amounts(&self.liabilities)
    }

    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.total_liabilities()
    }

    pub fn save(&self) -> NetWorth {
        NetWorth::from_items(self.assets.clone(), self.liabilities.clone())
    }
}
