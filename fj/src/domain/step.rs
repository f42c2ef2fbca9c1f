//! The eight journey steps

use serde::{Deserialize, Serialize};

/// One step of the journey, numbered 1 through 8
///
/// Serialized as its number so the persisted `currentStep` stays a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    #[default]
    CashFlow = 1,
    NetWorth = 2,
    Goals = 3,
    RiskAssessment = 4,
    Protection = 5,
    Plan = 6,
    Track = 7,
    Status = 8,
}

impl Step {
    /// All steps in journey order
    pub const ALL: [Step; 8] = [
        Step::CashFlow,
        Step::NetWorth,
        Step::Goals,
        Step::RiskAssessment,
        Step::Protection,
        Step::Plan,
        Step::Track,
        Step::Status,
    ];

    pub const FIRST: Step = Step::CashFlow;
    pub const LAST: Step = Step::Status;

    /// 1-based step number
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Look up a step by its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CashFlow => "Cash Flow",
            Self::NetWorth => "Net Worth",
            Self::Goals => "Goals",
            Self::RiskAssessment => "Risk Assessment",
            Self::Protection => "Protection",
            Self::Plan => "Plan",
            Self::Track => "Track",
            Self::Status => "Status",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CashFlow => "Track your income and expenses",
            Self::NetWorth => "Calculate your assets and liabilities",
            Self::Goals => "Define your financial goals",
            Self::RiskAssessment => "Evaluate your risk profile",
            Self::Protection => "Assess wealth protection needs",
            Self::Plan => "Get AI-powered recommendations",
            Self::Track => "Monitor your progress",
            Self::Status => "View your financial dashboard",
        }
    }

    /// The following step, `None` at the last step
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, `None` at the first step
    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| format!("Step {} is out of range (1-{})", number, crate::TOTAL_STEPS))
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(1), Some(Step::CashFlow));
        assert_eq!(Step::from_number(8), Some(Step::Status));
        assert_eq!(Step::from_number(9), None);
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        assert_eq!(Step::FIRST.previous(), None);
        assert_eq!(Step::LAST.next(), None);
        assert_eq!(Step::Goals.next(), Some(Step::RiskAssessment));
        assert_eq!(Step::Goals.previous(), Some(Step::NetWorth));
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Step::Plan).unwrap(), "6");
        let step: Step = serde_json::from_str("3").unwrap();
        assert_eq!(step, Step::Goals);
        assert!(serde_json::from_str::<Step>("0").is_err());
        assert!(serde_json::from_str::<Step>("12").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::RiskAssessment.to_string(), "Step 4: Risk Assessment");
    }
}
