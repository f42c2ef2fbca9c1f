//! Editable form state for steps 1-5
//!
//! A form is seeded from its slice, edited freely with running totals, and
//! only reaches the store when `save()` hands back a finished slice.

mod cash_flow;
mod error;
mod goals;
mod net_worth;
mod protection;
mod risk;

pub use cash_flow::CashFlowForm;
pub use error::FormError;
pub use goals::{GoalDraft, GoalsForm};
pub use net_worth::{ItemKind, NetWorthForm};
pub use protection::ProtectionForm;
pub use risk::RiskForm;

/// Reject NaN and infinities, which cannot be stored as JSON numbers
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, FormError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormError::NotFinite(field))
    }
}
