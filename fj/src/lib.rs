//! FinJourney - eight-step personal finance journey
//!
//! Walks a user through cash flow, net worth, goals, risk, protection, plan,
//! tracking and status steps. Every step edits one slice of a single
//! [`Journey`] aggregate which is persisted wholesale under one storage key.
//!
//! # Architecture
//!
//! ```text
//! forms (step 1-5 editors) ──save──▶ JourneyStore ◀──navigate── Wizard
//!                                       │   ▲
//!                          plan (webhook│   │restore)
//!                           + explain)  ▼   │
//!                                     Storage (file / memory)
//! ```
//!
//! # Modules
//!
//! - [`domain`] - slice types, step catalogue, rounding helpers
//! - [`store`] - storage seam and the persistent journey store
//! - [`wizard`] - step navigation with persistence on every transition
//! - [`completeness`] - per-step presence checks
//! - [`forms`] - editable form state for steps 1-5
//! - [`plan`] - recommendation webhook, local explanation proxy, fallback plan
//! - [`tracking`] - monthly tracking entries and summaries
//! - [`status`] - read-only dashboard metrics
//! - [`session`] - command execution shared by the CLI and the REPL
//! - [`view`] - terminal rendering of each step
//! - [`cli`], [`repl`] - one-shot commands and the interactive journey
//! - [`config`] - YAML configuration with environment overrides

pub mod cli;
pub mod completeness;
pub mod config;
pub mod domain;
pub mod forms;
pub mod notice;
pub mod plan;
pub mod repl;
pub mod session;
pub mod status;
pub mod store;
pub mod tracking;
pub mod view;
pub mod wizard;

pub use config::Config;
pub use domain::{
    CashFlow, FinancialGoal, Goals, Journey, LineItem, NetWorth, Recommendation, RiskAssessment, RiskProfile, Step,
    TrackingRecord, UserProfile, WealthProtection,
};
pub use notice::{Notice, NoticeLevel};
pub use plan::{
    ExplainClient, ExplainError, ExplainService, PlanError, PlanOutcome, PlanSource, Planner, RecommendationService,
    WebhookClient,
};
pub use status::StatusReport;
pub use store::{FileStorage, JourneyStore, MemoryStorage, RestoreReport, Storage, StoreError};
pub use tracking::{TrackingEntry, TrackingSummary};
pub use wizard::{NavigationError, Transition, Wizard};

/// Storage key the whole journey is persisted under
pub const STORAGE_KEY: &str = "ffp_journeyData";

/// Number of steps in the journey
pub const TOTAL_STEPS: u8 = 8;
