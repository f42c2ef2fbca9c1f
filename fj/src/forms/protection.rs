//! Step 5 form

use std::collections::BTreeMap;

use tracing::debug;

use super::FormError;
use crate::domain::{
    CYBER_QUESTIONS, CyberLevel, INSURANCE_TYPES, MAX_EMERGENCY_MONTHS, MIN_EMERGENCY_MONTHS, WealthProtection,
    cyber_score, protection_score,
};

/// Protection form state
///
/// Only the cyber score is stored, not the individual checklist answers, so the
/// checklist starts empty each time the step is opened. Until an item is ticked
/// or the checklist is cleared, the stored score stands.
#[derive(Debug, Clone)]
pub struct ProtectionForm {
    cyber_checks: Option<BTreeMap<u8, bool>>,
    stored_cyber: u32,
    emergency_fund_months: u32,
    insurance_needs: BTreeMap<String, bool>,
}

impl Default for ProtectionForm {
    fn default() -> Self {
        Self::from_slice(&WealthProtection::default())
    }
}

impl ProtectionForm {
    pub fn from_slice(protection: &WealthProtection) -> Self {
        Self {
            cyber_checks: None,
            stored_cyber: protection.cyber_awareness,
            emergency_fund_months: clamp_months(protection.emergency_fund_months),
            insurance_needs: protection.insurance_needs.clone(),
        }
    }

    /// Tick or untick one cyber-security checklist item
    pub fn set_cyber(&mut self, id: u8, checked: bool) -> Result<(), FormError> {
        debug!(id, checked, "ProtectionForm::set_cyber: called");
        if !CYBER_QUESTIONS.iter().any(|q| q.id == id) {
            return Err(FormError::UnknownCyberItem(id));
        }
        self.cyber_checks.get_or_insert_with(BTreeMap::new).insert(id, checked);
        Ok(())
    }

    /// Untick the whole checklist, dropping the stored score
    pub fn clear_cyber(&mut self) {
        debug!("ProtectionForm::clear_cyber: called");
        self.cyber_checks = Some(BTreeMap::new());
    }

    /// Mark an insurance type as held or not
    ///
    /// `name` matches a known insurance type case-insensitively, with or
    /// without the trailing " Insurance".
    pub fn set_insurance(&mut self, name: &str, held: bool) -> Result<(), FormError> {
        debug!(%name, held, "ProtectionForm::set_insurance: called");
        let wanted = name.trim().to_lowercase();
        let insurance = INSURANCE_TYPES
            .iter()
            .find(|t| {
                let full = t.name.to_lowercase();
                full == wanted || full.trim_end_matches(" insurance") == wanted
            })
            .ok_or_else(|| FormError::UnknownInsurance(name.to_string()))?;
        self.insurance_needs.insert(insurance.name.to_string(), held);
        Ok(())
    }

    /// Set the emergency fund horizon, clamped to 1-12 months
    pub fn set_emergency_fund_months(&mut self, months: u32) {
        self.emergency_fund_months = clamp_months(months);
    }

    pub fn emergency_fund_months(&self) -> u32 {
        self.emergency_fund_months
    }

    pub fn insurance_needs(&self) -> &BTreeMap<String, bool> {
        &self.insurance_needs
    }

    pub fn cyber_score(&self) -> u32 {
        match &self.cyber_checks {
            Some(checks) => cyber_score(checks.values().filter(|checked| **checked).count()),
            None => self.stored_cyber,
        }
    }

    pub fn cyber_level(&self) -> CyberLevel {
        CyberLevel::from_score(self.cyber_score())
    }

    pub fn insurance_count(&self) -> usize {
        self.insurance_needs.values().filter(|held| **held).count()
    }

    pub fn protection_score(&self) -> u32 {
        protection_score(self.cyber_score(), self.insurance_count())
    }

    /// Emergency fund worth `emergency_fund_months` of `monthly_expenses`
    pub fn recommended_emergency_fund(&self, monthly_expenses: f64) -> f64 {
        monthly_expenses * f64::from(self.emergency_fund_months)
    }

    pub fn save(&self) -> WealthProtection {
        WealthProtection {
            cyber_awareness: self.cyber_score(),
            emergency_fund_months: self.emergency_fund_months,
            insurance_needs: self.insurance_needs.clone(),
            protection_score: self.protection_score(),
        }
    }
}

fn clamp_months(months: u32) -> u32 {
    months.clamp(MIN_EMERGENCY_MONTHS, MAX_EMERGENCY_MONTHS)
}
