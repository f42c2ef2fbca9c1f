//! Step 3 form

use tracing::debug;

use super::{FormError, finite};
use crate::domain::{
    DEFAULT_PRIORITY, FinancialGoal, Goals, MAX_PRIORITY, MIN_PRIORITY, generate_id, sorted_by_priority,
};

/// A goal as entered, before it gets an ID
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: Option<f64>,
    pub timeline_months: Option<u32>,
    pub category: String,
    pub priority: Option<u8>,
}

impl GoalDraft {
    fn validate(self) -> Result<FinancialGoal, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingGoalField("name"));
        }
        let target_amount = self.target_amount.ok_or(FormError::MissingGoalField("target amount"))?;
        let target_amount = finite("Goal target amount", target_amount)?;
        let timeline = self.timeline_months.ok_or(FormError::MissingGoalField("timeline"))?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::MissingGoalField("category"));
        }

        Ok(FinancialGoal {
            id: generate_id(),
            name: name.to_string(),
            target_amount,
            timeline,
            category: category.to_string(),
            priority: clamp_priority(self.priority.unwrap_or(DEFAULT_PRIORITY)),
        })
    }
}

fn clamp_priority(priority: u8) -> u8 {
    priority.clamp(MIN_PRIORITY, MAX_PRIORITY)
}

#[derive(Debug, Clone, Default)]
pub struct GoalsForm {
    goals: Vec<FinancialGoal>,
}

impl GoalsForm {
    pub fn from_slice(goals: &Goals) -> Self {
        Self {
            goals: goals.goals.clone(),
        }
    }

    pub fn add(&mut self, draft: GoalDraft) -> Result<&FinancialGoal, FormError> {
        debug!(name = %draft.name, "GoalsForm::add: called");
        let goal = draft.validate()?;
        self.goals.push(goal);
        Ok(&self.goals[self.goals.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> Result<(), FormError> {
        debug!(%id, "GoalsForm::remove: called");
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return Err(FormError::UnknownItem {
                kind: "goal",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Change a goal's priority, clamped to 1-10
    pub fn set_priority(&mut self, id: &str, priority: u8) -> Result<(), FormError> {
        debug!(%id, priority, "GoalsForm::set_priority: called");
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| FormError::UnknownItem {
                kind: "goal",
                id: id.to_string(),
            })?;
        goal.priority = clamp_priority(priority);
        Ok(())
    }

    /// Goals in insertion order
    pub fn goals(&self) -> &[FinancialGoal] {
        &self.goals
    }

    /// Goals for display, highest priority first
    pub fn sorted(&self) -> Vec<&FinancialGoal> {
        sorted_by_priority(&self.goals)
    }

    pub fn save(&self) -> Goals {
        Goals {
            goals: self.goals.clone(),
        }
    }
}
