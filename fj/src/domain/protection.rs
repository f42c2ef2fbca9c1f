//! Step 5 slice: emergency fund, insurance and cyber-security hygiene

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::money::js_round;

pub const MIN_EMERGENCY_MONTHS: u32 = 1;
pub const MAX_EMERGENCY_MONTHS: u32 = 12;

/// Points awarded per cyber-security or insurance item
const POINTS_PER_ITEM: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WealthProtection {
    /// Cyber score, 0-10
    pub cyber_awareness: u32,
    pub emergency_fund_months: u32,
    pub insurance_needs: BTreeMap<String, bool>,
    pub protection_score: u32,
}

impl Default for WealthProtection {
    fn default() -> Self {
        Self {
            cyber_awareness: 5,
            emergency_fund_months: 6,
            insurance_needs: BTreeMap::new(),
            protection_score: 0,
        }
    }
}

impl WealthProtection {
    /// Number of insurance types marked as held
    pub fn insurance_count(&self) -> usize {
        self.insurance_needs.values().filter(|held| **held).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceType {
    pub name: &'static str,
    pub description: &'static str,
}

pub const INSURANCE_TYPES: &[InsuranceType] = &[
    InsuranceType {
        name: "Life Insurance",
        description: "Protects your family from financial loss",
    },
    InsuranceType {
        name: "Health Insurance",
        description: "Covers medical expenses",
    },
    InsuranceType {
        name: "Disability Insurance",
        description: "Replaces income if you become disabled",
    },
    InsuranceType {
        name: "Home Insurance",
        description: "Protects your property",
    },
    InsuranceType {
        name: "Auto Insurance",
        description: "Covers vehicle-related risks",
    },
    InsuranceType {
        name: "Travel Insurance",
        description: "Covers travel-related risks",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyberQuestion {
    pub id: u8,
    pub question: &'static str,
}

pub const CYBER_QUESTIONS: &[CyberQuestion] = &[
    CyberQuestion {
        id: 1,
        question: "Do you use strong, unique passwords for financial accounts?",
    },
    CyberQuestion {
        id: 2,
        question: "Do you enable two-factor authentication (2FA)?",
    },
    CyberQuestion {
        id: 3,
        question: "Do you regularly update your devices and software?",
    },
    CyberQuestion {
        id: 4,
        question: "Do you avoid phishing emails and suspicious links?",
    },
    CyberQuestion {
        id: 5,
        question: "Do you use a VPN on public WiFi networks?",
    },
];

/// Cyber score for a number of checked items
pub fn cyber_score(checked: usize) -> u32 {
    checked as u32 * POINTS_PER_ITEM
}

/// Overall protection score from the cyber score and held insurance count
pub fn protection_score(cyber_score: u32, insurance_count: usize) -> u32 {
    let total = cyber_score + insurance_count as u32 * POINTS_PER_ITEM;
    js_round(f64::from(total) / 2.0) as u32
}

/// How well protected a cyber score is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyberLevel {
    WellProtected,
    ModeratelyProtected,
    AtRisk,
}

impl CyberLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 8 {
            Self::WellProtected
        } else if score >= 5 {
            Self::ModeratelyProtected
        } else {
            Self::AtRisk
        }
    }
}

impl std::fmt::Display for CyberLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WellProtected => write!(f, "well protected"),
            Self::ModeratelyProtected => write!(f, "moderately protected"),
            Self::AtRisk => write!(f, "at risk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyber_score_caps_at_ten_for_five_items() {
        assert_eq!(cyber_score(0), 0);
        assert_eq!(cyber_score(CYBER_QUESTIONS.len()), 10);
    }

    #[test]
    fn test_protection_score() {
        assert_eq!(protection_score(0, 0), 0);
        assert_eq!(protection_score(10, 0), 5);
        assert_eq!(protection_score(6, 3), 6);
        assert_eq!(protection_score(10, 6), 11);
    }

    #[test]
    fn test_cyber_level() {
        assert_eq!(CyberLevel::from_score(10), CyberLevel::WellProtected);
        assert_eq!(CyberLevel::from_score(8), CyberLevel::WellProtected);
        assert_eq!(CyberLevel::from_score(6), CyberLevel::ModeratelyProtected);
        assert_eq!(CyberLevel::from_score(4), CyberLevel::AtRisk);
    }

    #[test]
    fn test_insurance_count_ignores_unchecked() {
        let protection = WealthProtection {
            insurance_needs: BTreeMap::from([
                ("Life Insurance".to_string(), true),
                ("Home Insurance".to_string(), false),
                ("Health Insurance".to_string(), true),
            ]),
            ..Default::default()
        };
        assert_eq!(protection.insurance_count(), 2);
    }
}
