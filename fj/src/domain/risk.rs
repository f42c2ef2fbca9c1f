//! Step 4 slice: risk tolerance, capacity and the overall profile

use serde::{Deserialize, Serialize};

use super::money::js_round;

/// Score used for a category with no answers
pub const NEUTRAL_SCORE: u32 = 5;

/// Overall risk profile, derived from the mean of tolerance and capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    /// Profile for a tolerance/capacity pair
    ///
    /// Mean `<= 3` is conservative, `<= 6` moderate, anything above aggressive.
    pub fn from_scores(tolerance: u32, capacity: u32) -> Self {
        let average = f64::from(tolerance + capacity) / 2.0;
        if average <= 3.0 {
            Self::Conservative
        } else if average <= 6.0 {
            Self::Moderate
        } else {
            Self::Aggressive
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 0-10
    pub risk_tolerance: u32,
    /// 0-10
    pub risk_capacity: u32,
    pub overall_risk_profile: RiskProfile,
}

impl Default for RiskAssessment {
    fn default() -> Self {
        Self {
            risk_tolerance: NEUTRAL_SCORE,
            risk_capacity: NEUTRAL_SCORE,
            overall_risk_profile: RiskProfile::Moderate,
        }
    }
}

impl RiskAssessment {
    pub fn from_scores(risk_tolerance: u32, risk_capacity: u32) -> Self {
        Self {
            risk_tolerance,
            risk_capacity,
            overall_risk_profile: RiskProfile::from_scores(risk_tolerance, risk_capacity),
        }
    }
}

/// The two question groups of the assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    Tolerance,
    Capacity,
}

impl RiskCategory {
    pub fn questions(self) -> &'static [RiskQuestion] {
        match self {
            Self::Tolerance => TOLERANCE_QUESTIONS,
            Self::Capacity => CAPACITY_QUESTIONS,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tolerance => write!(f, "risk tolerance"),
            Self::Capacity => write!(f, "risk capacity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskOption {
    pub text: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskQuestion {
    pub id: u8,
    pub question: &'static str,
    pub options: [RiskOption; 3],
}

impl RiskQuestion {
    pub fn accepts(&self, score: u32) -> bool {
        self.options.iter().any(|option| option.score == score)
    }
}

const fn option(text: &'static str, score: u32) -> RiskOption {
    RiskOption { text, score }
}

pub const TOLERANCE_QUESTIONS: &[RiskQuestion] = &[
    RiskQuestion {
        id: 1,
        question: "How would you react if your investment dropped 20% in value?",
        options: [
            option("Sell immediately to avoid further losses", 1),
            option("Hold and wait for recovery", 5),
            option("Buy more at the lower price", 9),
        ],
    },
    RiskQuestion {
        id: 2,
        question: "What is your investment time horizon?",
        options: [
            option("Less than 2 years", 1),
            option("2-5 years", 5),
            option("More than 5 years", 9),
        ],
    },
    RiskQuestion {
        id: 3,
        question: "How comfortable are you with market volatility?",
        options: [
            option("Very uncomfortable - prefer stable returns", 1),
            option("Moderately comfortable - accept some fluctuation", 5),
            option("Very comfortable - expect and accept volatility", 9),
        ],
    },
];

pub const CAPACITY_QUESTIONS: &[RiskQuestion] = &[
    RiskQuestion {
        id: 1,
        question: "What percentage of your income can you afford to invest annually?",
        options: [option("Less than 5%", 1), option("5-15%", 5), option("More than 15%", 9)],
    },
    RiskQuestion {
        id: 2,
        question: "Do you have an emergency fund?",
        options: [
            option("No emergency fund", 1),
            option("1-3 months of expenses", 5),
            option("6+ months of expenses", 9),
        ],
    },
    RiskQuestion {
        id: 3,
        question: "What is your current debt situation?",
        options: [
            option("High debt (debt > assets)", 1),
            option("Moderate debt (debt < assets)", 5),
            option("Low/No debt", 9),
        ],
    },
];

/// Rounded mean of the answered scores, [`NEUTRAL_SCORE`] when nothing is answered
pub fn category_score<I>(scores: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), score| (sum + score, count + 1));
    if count == 0 {
        return NEUTRAL_SCORE;
    }
    js_round(f64::from(sum) / f64::from(count)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_thresholds() {
        assert_eq!(RiskProfile::from_scores(1, 5), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_scores(3, 3), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_scores(3, 4), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_scores(5, 5), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_scores(6, 6), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_scores(6, 7), RiskProfile::Aggressive);
        assert_eq!(RiskProfile::from_scores(9, 9), RiskProfile::Aggressive);
    }

    #[test]
    fn test_category_score() {
        assert_eq!(category_score(Vec::new()), NEUTRAL_SCORE);
        assert_eq!(category_score([1, 5, 9]), 5);
        assert_eq!(category_score([1, 1, 5]), 2);
        assert_eq!(category_score([5, 9, 9]), 8);
        assert_eq!(category_score([1, 9]), 5);
    }

    #[test]
    fn test_every_question_offers_1_5_9() {
        for question in TOLERANCE_QUESTIONS.iter().chain(CAPACITY_QUESTIONS) {
            let scores: Vec<u32> = question.options.iter().map(|o| o.score).collect();
            assert_eq!(scores, vec![1, 5, 9]);
            assert!(!question.accepts(3));
        }
    }

    #[test]
    fn test_profile_serializes_as_word() {
        let assessment = RiskAssessment::from_scores(9, 9);
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["overallRiskProfile"], "Aggressive");
        assert_eq!(json["riskTolerance"], 9);
    }
}
