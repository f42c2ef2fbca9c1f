//! CLI argument parsing for fj

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::forms::ItemKind;

#[derive(Parser, Debug)]
#[command(
    name = "fj",
    author,
    version,
    about = "Eight-step personal finance journey",
    after_help = "Logs are written to: ~/.local/share/finjourney/logs/fj.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Defaults to the interactive journey
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the current step
    Show,

    /// Go to the next step
    Next,

    /// Go to the previous step
    #[command(alias = "previous")]
    Prev,

    /// Jump straight to a step (1-8)
    Goto {
        #[arg(allow_negative_numbers = true)]
        step: i64,
    },

    /// Step 1: set income and expenses
    CashFlow {
        /// Monthly income
        #[arg(short, long, value_parser = finite_amount)]
        income: Option<f64>,

        /// Expense as CATEGORY=AMOUNT (repeatable)
        #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
        expenses: Vec<String>,

        /// Remove an expense category (repeatable)
        #[arg(short, long = "remove", value_name = "CATEGORY")]
        removals: Vec<String>,
    },

    /// Step 2: edit assets and liabilities
    NetWorth {
        #[command(subcommand)]
        action: Option<ItemAction>,
    },

    /// Step 3: edit financial goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalAction>,
    },

    /// Step 4: answer the risk questionnaire
    Risk {
        /// Scores for the three tolerance questions, e.g. 5,9,5
        #[arg(short, long, value_delimiter = ',')]
        tolerance: Vec<u32>,

        /// Scores for the three capacity questions, e.g. 1,5,9
        #[arg(short = 'a', long, value_delimiter = ',')]
        capacity: Vec<u32>,
    },

    /// Step 5: cyber checklist, insurance and emergency fund
    Protection {
        /// Checked cyber-security items, e.g. 1,2,4 (replaces the stored score)
        #[arg(long, value_delimiter = ',')]
        cyber: Vec<u8>,

        /// Untick every cyber-security item
        #[arg(long)]
        clear_cyber: bool,

        /// Insurance held (repeatable), e.g. life, health
        #[arg(short, long = "insurance", value_name = "TYPE")]
        insurance: Vec<String>,

        /// Insurance no longer held (repeatable)
        #[arg(long = "drop-insurance", value_name = "TYPE")]
        dropped: Vec<String>,

        /// Months of expenses to keep as an emergency fund (1-12)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Set profile details sent with the plan
    Profile {
        #[arg(long)]
        age: Option<u32>,
    },

    /// Step 6: generate or explain the investment plan
    Plan {
        #[command(subcommand)]
        action: Option<PlanAction>,
    },

    /// Step 7: record monthly actuals
    Track {
        #[command(subcommand)]
        action: Option<TrackAction>,
    },

    /// Step 8: financial dashboard
    Status,

    /// Clear every step and delete the saved journey
    Reset,

    /// Interactive journey (REPL)
    Journey,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ItemAction {
    /// Add an asset or liability
    Add {
        kind: ItemKindArg,
        name: String,
        amount: String,
    },

    /// Remove the item at a listed position
    Remove { kind: ItemKindArg, position: usize },

    /// Change the amount of the item at a listed position
    Set {
        kind: ItemKindArg,
        position: usize,
        #[arg(value_parser = finite_amount)]
        amount: f64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKindArg {
    Asset,
    Liability,
}

impl From<ItemKindArg> for ItemKind {
    fn from(kind: ItemKindArg) -> Self {
        match kind {
            ItemKindArg::Asset => ItemKind::Asset,
            ItemKindArg::Liability => ItemKind::Liability,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GoalAction {
    /// Add a goal
    Add {
        name: String,

        /// Target amount
        #[arg(short, long, value_parser = finite_amount)]
        target: Option<f64>,

        /// Months until the goal is due
        #[arg(short, long)]
        months: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        /// 1 (lowest) to 10 (highest), default 5
        #[arg(short, long)]
        priority: Option<u8>,
    },

    /// Remove the goal at a listed position
    Remove { position: usize },

    /// Change the priority of the goal at a listed position
    Priority { position: usize, priority: u8 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Request a plan from the recommendation webhook
    Generate,

    /// Ask the local AI proxy to explain the current plan
    Explain,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TrackAction {
    /// Record a month
    Add {
        /// YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long, value_parser = finite_amount)]
        income: Option<f64>,

        #[arg(short, long, value_parser = finite_amount)]
        expenses: Option<f64>,

        /// Amount invested, default 0
        #[arg(long, value_parser = finite_amount)]
        investment: Option<f64>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List tracked months, most recent first
    List,

    /// Delete the month at a listed position
    Delete { position: usize },
}

/// Amount argument; NaN and infinities are refused
fn finite_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite amount", s))
    }
}

/// Parser for one line typed into the interactive journey
#[derive(Parser, Debug)]
#[command(name = "fj", no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cash_flow() {
        let cli = Cli::try_parse_from([
            "fj",
            "cash-flow",
            "--income",
            "50000",
            "-e",
            "Housing=20000",
            "-e",
            "Food=10000",
        ])
        .unwrap();
        match cli.command {
            Some(Command::CashFlow {
                income, expenses, ..
            }) => {
                assert_eq!(income, Some(50_000.0));
                assert_eq!(expenses, vec!["Housing=20000", "Food=10000"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_goto_negative() {
        let cli = Cli::try_parse_from(["fj", "goto", "-3"]).unwrap();
        assert_eq!(cli.command, Some(Command::Goto { step: -3 }));
    }

    #[test]
    fn test_parse_risk_lists() {
        let cli = Cli::try_parse_from(["fj", "risk", "--tolerance", "5,9,5", "--capacity", "1,5,9"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Risk {
                tolerance: vec![5, 9, 5],
                capacity: vec![1, 5, 9],
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fj", "status", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_repl_line_without_binary_name() {
        let line = ReplLine::try_parse_from(["net-worth", "add", "asset", "Savings", "1000"]).unwrap();
        assert_eq!(
            line.command,
            Command::NetWorth {
                action: Some(ItemAction::Add {
                    kind: ItemKindArg::Asset,
                    name: "Savings".to_string(),
                    amount: "1000".to_string(),
                })
            }
        );
    }

    #[test]
    fn test_non_finite_amounts_refused() {
        for value in ["inf", "NaN", "infinity"] {
            assert!(ReplLine::try_parse_from(["cash-flow", "--income", value]).is_err(), "{}", value);
            assert!(
                ReplLine::try_parse_from(["track", "add", "--income", value, "--expenses", "40"]).is_err(),
                "{}",
                value
            );
            assert!(ReplLine::try_parse_from(["goals", "add", "Moon", "--target", value]).is_err(), "{}", value);
        }
        assert!(ReplLine::try_parse_from(["net-worth", "set", "asset", "1", "NaN"]).is_err());

        let line = ReplLine::try_parse_from(["track", "add", "--income", "5000.5", "--expenses", "40"]).unwrap();
        match line.command {
            Command::Track {
                action: Some(TrackAction::Add { income, .. }),
            } => assert_eq!(income, Some(5000.5)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_clear_cyber() {
        let line = ReplLine::try_parse_from(["protection", "--clear-cyber"]).unwrap();
        match line.command {
            Command::Protection { cyber, clear_cyber, .. } => {
                assert!(cyber.is_empty());
                assert!(clear_cyber);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
