//! The journey aggregate

use serde::{Deserialize, Serialize};

use super::{CashFlow, Goals, NetWorth, Recommendation, RiskAssessment, Step, TrackingRecord, WealthProtection};

/// Default age for a fresh journey
pub const DEFAULT_AGE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self { age: DEFAULT_AGE }
    }
}

/// Every slice of the journey plus the step being shown
///
/// This is the unit of persistence: it is always written and read whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub current_step: Step,
    pub cash_flow: CashFlow,
    pub net_worth: NetWorth,
    pub goals: Goals,
    pub risk_assessment: RiskAssessment,
    pub wealth_protection: WealthProtection,
    #[serde(rename = "userData")]
    pub user_profile: UserProfile,
    pub recommendations: Option<Recommendation>,
    pub tracking_history: Vec<TrackingRecord>,
}

impl Journey {
    /// A fresh journey for a user of the given age
    pub fn with_age(age: u32) -> Self {
        Self {
            user_profile: UserProfile { age },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let journey = Journey::default();
        assert_eq!(journey.current_step, Step::CashFlow);
        assert_eq!(journey.user_profile.age, 30);
        assert_eq!(journey.risk_assessment.risk_tolerance, 5);
        assert_eq!(journey.wealth_protection.emergency_fund_months, 6);
        assert!(journey.recommendations.is_none());
    }

    #[test]
    fn test_top_level_keys() {
        let json = serde_json::to_value(Journey::with_age(41)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "currentStep",
            "cashFlow",
            "netWorth",
            "goals",
            "riskAssessment",
            "wealthProtection",
            "userData",
            "recommendations",
            "trackingHistory",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(json["userData"]["age"], 41);
        assert!(json["recommendations"].is_null());
    }
}
