//! Step 4 form

use std::collections::BTreeMap;

use tracing::debug;

use super::FormError;
use crate::domain::{RiskAssessment, RiskCategory, RiskProfile, category_score};

/// Answers keyed by question ID; starts empty every time the step is opened
#[derive(Debug, Clone, Default)]
pub struct RiskForm {
    tolerance: BTreeMap<u8, u32>,
    capacity: BTreeMap<u8, u32>,
}

impl RiskForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn answers(&self, category: RiskCategory) -> &BTreeMap<u8, u32> {
        match category {
            RiskCategory::Tolerance => &self.tolerance,
            RiskCategory::Capacity => &self.capacity,
        }
    }

    /// Record the chosen option score for one question
    pub fn answer(&mut self, category: RiskCategory, question_id: u8, score: u32) -> Result<(), FormError> {
        debug!(%category, question_id, score, "RiskForm::answer: called");
        let question = category
            .questions()
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(FormError::UnknownQuestion {
                category,
                id: question_id,
            })?;
        if !question.accepts(score) {
            return Err(FormError::InvalidScore {
                category,
                id: question_id,
                score,
            });
        }
        let answers = match category {
            RiskCategory::Tolerance => &mut self.tolerance,
            RiskCategory::Capacity => &mut self.capacity,
        };
        answers.insert(question_id, score);
        Ok(())
    }

    /// Answer a category's questions in order with the given scores
    pub fn answer_all(&mut self, category: RiskCategory, scores: &[u32]) -> Result<(), FormError> {
        let expected = category.questions().len();
        if scores.len() > expected {
            return Err(FormError::TooManyAnswers {
                category,
                given: scores.len(),
                expected,
            });
        }
        for (question, score) in category.questions().iter().zip(scores) {
            self.answer(category, question.id, *score)?;
        }
        Ok(())
    }

    pub fn answered(&self, category: RiskCategory) -> usize {
        self.answers(category).len()
    }

    /// Rounded mean of the answers so far, 5 when none
    pub fn score(&self, category: RiskCategory) -> u32 {
        category_score(self.answers(category).values().copied())
    }

    pub fn profile(&self) -> RiskProfile {
        RiskProfile::from_scores(self.score(RiskCategory::Tolerance), self.score(RiskCategory::Capacity))
    }

    pub fn all_answered(&self) -> bool {
        [RiskCategory::Tolerance, RiskCategory::Capacity]
            .into_iter()
            .all(|category| self.answered(category) == category.questions().len())
    }

    /// Finished assessment; every question of both categories must be answered
    pub fn save(&self) -> Result<RiskAssessment, FormError> {
        for category in [RiskCategory::Tolerance, RiskCategory::Capacity] {
            let expected = category.questions().len();
            let answered = self.answered(category);
            if answered != expected {
                return Err(FormError::UnansweredRisk {
                    category,
                    answered,
                    expected,
                });
            }
        }
        Ok(RiskAssessment::from_scores(
            self.score(RiskCategory::Tolerance),
            self.score(RiskCategory::Capacity),
        ))
    }
}
