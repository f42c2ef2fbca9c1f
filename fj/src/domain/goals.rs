//! Step 3 slice: financial goals

use serde::{Deserialize, Serialize};

pub const GOAL_CATEGORIES: &[&str] = &[
    "Retirement",
    "Home Purchase",
    "Education",
    "Vacation",
    "Vehicle",
    "Emergency Fund",
    "Business",
    "Investment",
    "Wedding",
    "Other",
];

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;
pub const DEFAULT_PRIORITY: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    /// Months until the goal is due
    pub timeline: u32,
    pub category: String,
    /// 1 (lowest) to 10 (highest)
    pub priority: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub goals: Vec<FinancialGoal>,
}

/// Goals ordered by priority, highest first
///
/// Equal priorities keep their insertion order.
pub fn sorted_by_priority(goals: &[FinancialGoal]) -> Vec<&FinancialGoal> {
    let mut sorted: Vec<&FinancialGoal> = goals.iter().collect();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str, priority: u8) -> FinancialGoal {
        FinancialGoal {
            id: name.to_string(),
            name: name.to_string(),
            target_amount: 1_000.0,
            timeline: 12,
            category: "Other".to_string(),
            priority,
        }
    }

    #[test]
    fn test_sorted_by_priority_is_stable() {
        let goals = vec![goal("a", 3), goal("b", 9), goal("c", 3), goal("d", 9), goal("e", 5)];
        let names: Vec<&str> = sorted_by_priority(&goals).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn test_sorting_does_not_reorder_source() {
        let goals = vec![goal("low", 1), goal("high", 10)];
        let _ = sorted_by_priority(&goals);
        assert_eq!(goals[0].name, "low");
    }

    #[test]
    fn test_timeline_key() {
        let json = serde_json::to_value(goal("x", 2)).unwrap();
        assert_eq!(json["targetAmount"], 1_000.0);
        assert_eq!(json["timeline"], 12);
    }
}
