//! JourneyStore - the live journey plus its persisted copy

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{Storage, StoreError};
use crate::domain::{
    CashFlow, Goals, Journey, NetWorth, Recommendation, RiskAssessment, Step, TrackingRecord, UserProfile,
    WealthProtection,
};
use crate::tracking::TrackingEntry;

/// Slice keys of the persisted aggregate, in the order they are restored
const SLICE_KEYS: [&str; 9] = [
    "currentStep",
    "cashFlow",
    "netWorth",
    "goals",
    "riskAssessment",
    "wealthProtection",
    "userData",
    "recommendations",
    "trackingHistory",
];

/// What [`JourneyStore::restore`] found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// A persisted journey existed under the store key
    pub found: bool,
    /// Slices that were missing or unreadable and fell back to their defaults
    pub defaulted: Vec<&'static str>,
}

impl RestoreReport {
    /// A journey was found and every slice restored as stored
    pub fn is_clean(&self) -> bool {
        self.found && self.defaulted.is_empty()
    }
}

/// Holds the journey in memory and persists it under one storage key
pub struct JourneyStore<S: Storage> {
    storage: S,
    key: String,
    defaults: Journey,
    state: Journey,
}

impl<S: Storage> JourneyStore<S> {
    /// Store with the default key and a default journey
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, crate::STORAGE_KEY, Journey::default())
    }

    /// Store under `key`, using `defaults` for a fresh journey and for slice fallback
    pub fn with_key(storage: S, key: impl Into<String>, defaults: Journey) -> Self {
        let key = key.into();
        debug!(%key, "JourneyStore::with_key: called");
        Self {
            storage,
            key,
            state: defaults.clone(),
            defaults,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn journey(&self) -> &Journey {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub(crate) fn set_current_step(&mut self, step: Step) {
        debug!(%step, "JourneyStore::set_current_step: called");
        self.state.current_step = step;
    }

    pub fn cash_flow(&self) -> &CashFlow {
        &self.state.cash_flow
    }

    pub fn set_cash_flow(&mut self, cash_flow: CashFlow) {
        debug!(income = cash_flow.monthly_income, "JourneyStore::set_cash_flow: called");
        self.state.cash_flow = cash_flow;
    }

    pub fn net_worth(&self) -> &NetWorth {
        &self.state.net_worth
    }

    pub fn set_net_worth(&mut self, net_worth: NetWorth) {
        debug!(net_worth = net_worth.net_worth, "JourneyStore::set_net_worth: called");
        self.state.net_worth = net_worth;
    }

    pub fn goals(&self) -> &Goals {
        &self.state.goals
    }

    pub fn set_goals(&mut self, goals: Goals) {
        debug!(count = goals.goals.len(), "JourneyStore::set_goals: called");
        self.state.goals = goals;
    }

    pub fn risk_assessment(&self) -> &RiskAssessment {
        &self.state.risk_assessment
    }

    pub fn set_risk_assessment(&mut self, risk_assessment: RiskAssessment) {
        debug!(profile = %risk_assessment.overall_risk_profile, "JourneyStore::set_risk_assessment: called");
        self.state.risk_assessment = risk_assessment;
    }

    pub fn wealth_protection(&self) -> &WealthProtection {
        &self.state.wealth_protection
    }

    pub fn set_wealth_protection(&mut self, wealth_protection: WealthProtection) {
        debug!(
            score = wealth_protection.protection_score,
            "JourneyStore::set_wealth_protection: called"
        );
        self.state.wealth_protection = wealth_protection;
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.state.user_profile
    }

    pub fn set_user_profile(&mut self, user_profile: UserProfile) {
        debug!(age = user_profile.age, "JourneyStore::set_user_profile: called");
        self.state.user_profile = user_profile;
    }

    pub fn recommendations(&self) -> Option<&Recommendation> {
        self.state.recommendations.as_ref()
    }

    pub fn set_recommendations(&mut self, recommendations: Option<Recommendation>) {
        debug!(
            present = recommendations.is_some(),
            "JourneyStore::set_recommendations: called"
        );
        self.state.recommendations = recommendations;
    }

    pub fn tracking_history(&self) -> &[TrackingRecord] {
        &self.state.tracking_history
    }

    /// Append a tracking record stamped with the current time
    pub fn append_tracking_record(&mut self, entry: TrackingEntry) -> &TrackingRecord {
        debug!(month = %entry.month, "JourneyStore::append_tracking_record: called");
        let record = entry.into_record(Utc::now());
        self.state.tracking_history.push(record);
        let last = self.state.tracking_history.len() - 1;
        &self.state.tracking_history[last]
    }

    /// Remove the tracking record at `index` (insertion order)
    pub fn remove_tracking_record(&mut self, index: usize) -> Option<TrackingRecord> {
        debug!(index, "JourneyStore::remove_tracking_record: called");
        if index < self.state.tracking_history.len() {
            Some(self.state.tracking_history.remove(index))
        } else {
            debug!("JourneyStore::remove_tracking_record: index out of range");
            None
        }
    }

    /// Write the whole journey under the store key
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, step = %self.state.current_step, "JourneyStore::persist: saved");
        Ok(())
    }

    /// Load the journey stored under the store key
    ///
    /// Never fails. Missing or unreadable slices fall back to their defaults
    /// one by one; an unparseable payload resets everything to defaults. When
    /// nothing is stored the in-memory journey is left as it is.
    pub fn restore(&mut self) -> RestoreReport {
        debug!(key = %self.key, "JourneyStore::restore: called");
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("JourneyStore::restore: nothing stored");
                return RestoreReport::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored journey, using defaults");
                self.state = self.defaults.clone();
                return RestoreReport {
                    found: false,
                    defaulted: SLICE_KEYS.to_vec(),
                };
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to parse stored journey, using defaults");
                self.state = self.defaults.clone();
                return RestoreReport {
                    found: true,
                    defaulted: SLICE_KEYS.to_vec(),
                };
            }
        };

        let mut defaulted = Vec::new();
        let d = &self.defaults;
        let restored = Journey {
            current_step: slice(&value, "currentStep", &d.current_step, &mut defaulted),
            cash_flow: slice(&value, "cashFlow", &d.cash_flow, &mut defaulted),
            net_worth: slice(&value, "netWorth", &d.net_worth, &mut defaulted),
            goals: slice(&value, "goals", &d.goals, &mut defaulted),
            risk_assessment: slice(&value, "riskAssessment", &d.risk_assessment, &mut defaulted),
            wealth_protection: slice(&value, "wealthProtection", &d.wealth_protection, &mut defaulted),
            user_profile: slice(&value, "userData", &d.user_profile, &mut defaulted),
            recommendations: slice(&value, "recommendations", &d.recommendations, &mut defaulted),
            tracking_history: slice(&value, "trackingHistory", &d.tracking_history, &mut defaulted),
        };
        self.state = restored;

        info!(
            step = %self.state.current_step,
            defaulted = defaulted.len(),
            "Restored journey"
        );
        RestoreReport { found: true, defaulted }
    }

    /// Put every slice back to its default and delete the stored journey
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.state = self.defaults.clone();
        self.storage.remove(&self.key)?;
        info!(key = %self.key, "Journey reset");
        Ok(())
    }
}

/// Read one slice, falling back to `fallback` when absent or malformed
fn slice<T>(value: &Value, key: &'static str, fallback: &T, defaulted: &mut Vec<&'static str>) -> T
where
    T: DeserializeOwned + Clone,
{
    let Some(raw) = value.get(key) else {
        debug!(slice = key, "slice: absent");
        defaulted.push(key);
        return fallback.clone();
    };

    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(slice = key, error = %e, "Stored slice unreadable, using default");
            defaulted.push(key);
            fallback.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinancialGoal, LineItem, RiskProfile};
    use crate::store::{FileStorage, MemoryStorage};
    use std::collections::BTreeMap;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn sample_journey() -> Journey {
        Journey {
            current_step: Step::Protection,
            cash_flow: CashFlow::from_parts(
                50_000.0,
                BTreeMap::from([("Housing".to_string(), 20_000.0), ("Food".to_string(), 10_000.0)]),
            ),
            net_worth: NetWorth::from_items(
                vec![LineItem::new("Savings", 120_000.5)],
                vec![LineItem::new("Car Loan", 40_000.0)],
            ),
            goals: Goals {
                goals: vec![FinancialGoal {
                    id: "g1".to_string(),
                    name: "House".to_string(),
                    target_amount: 2_000_000.0,
                    timeline: 60,
                    category: "Home Purchase".to_string(),
                    priority: 8,
                }],
            },
            risk_assessment: RiskAssessment::from_scores(9, 5),
            wealth_protection: WealthProtection {
                cyber_awareness: 8,
                emergency_fund_months: 9,
                insurance_needs: BTreeMap::from([("Life Insurance".to_string(), true)]),
                protection_score: 5,
            },
            user_profile: UserProfile { age: 27 },
            recommendations: Some(Recommendation {
                equity_allocation: 70.0,
                debt_allocation: 30.0,
                investment_strategy: "Growth".to_string(),
                ..Default::default()
            }),
            tracking_history: vec![],
        }
    }

    #[test]
    fn test_persist_then_restore_roundtrip() {
        let mut store = JourneyStore::new(MemoryStorage::new());
        let journey = sample_journey();
        store.state = journey.clone();
        store.append_tracking_record(TrackingEntry {
            month: "2026-09".to_string(),
            income: 50_000.0,
            expenses: 31_000.0,
            investment: 5_000.0,
            notes: "bonus".to_string(),
        });
        let expected = store.journey().clone();
        store.persist().unwrap();

        let storage = store.storage().clone();
        let mut fresh = JourneyStore::new(storage);
        let report = fresh.restore();

        assert!(report.is_clean(), "{:?}", report);
        assert_eq!(fresh.journey(), &expected);
    }

    #[test]
    fn test_restore_file_backed() {
        let temp = TempDir::new().unwrap();
        let mut store = JourneyStore::new(FileStorage::open(temp.path()).unwrap());
        store.set_goals(sample_journey().goals);
        store.persist().unwrap();

        let mut reopened = JourneyStore::new(FileStorage::open(temp.path()).unwrap());
        assert!(reopened.restore().is_clean());
        assert_eq!(reopened.goals().goals[0].name, "House");
    }

    #[test]
    fn test_restore_invalid_json_yields_defaults() {
        let storage = MemoryStorage::with_entry(crate::STORAGE_KEY, "{not json");
        let mut store = JourneyStore::new(storage);
        store.set_current_step(Step::Track);

        let report = store.restore();

        assert!(report.found);
        assert_eq!(report.defaulted.len(), SLICE_KEYS.len());
        assert_eq!(store.journey(), &Journey::default());
    }

    #[test]
    fn test_restore_nothing_stored_keeps_state() {
        let mut store = JourneyStore::new(MemoryStorage::new());
        store.set_user_profile(UserProfile { age: 50 });

        let report = store.restore();

        assert!(!report.found);
        assert_eq!(store.user_profile().age, 50);
    }

    #[test]
    fn test_restore_degrades_slice_by_slice() {
        let payload = serde_json::json!({
            "currentStep": 12,
            "cashFlow": {"monthlyIncome": 4000, "monthlyExpenses": {"Rent": 1500}, "totalExpenses": 1500, "netCashFlow": 2500},
            "netWorth": "garbage",
            "riskAssessment": {"riskTolerance": 8, "riskCapacity": 6, "overallRiskProfile": "Aggressive"},
            "recommendations": null
        });
        let storage = MemoryStorage::with_entry(crate::STORAGE_KEY, payload.to_string());
        let mut store = JourneyStore::new(storage);

        let report = store.restore();

        assert_eq!(store.current_step(), Step::CashFlow);
        assert_eq!(store.cash_flow().monthly_income, 4000.0);
        assert_eq!(store.net_worth(), &NetWorth::default());
        assert_eq!(store.risk_assessment().overall_risk_profile, RiskProfile::Aggressive);
        assert!(store.recommendations().is_none());
        assert!(report.defaulted.contains(&"currentStep"));
        assert!(report.defaulted.contains(&"netWorth"));
        assert!(report.defaulted.contains(&"goals"));
        assert!(!report.defaulted.contains(&"cashFlow"));
        assert!(!report.defaulted.contains(&"recommendations"));
    }

    #[test]
    fn test_restore_non_object_payload() {
        let storage = MemoryStorage::with_entry(crate::STORAGE_KEY, "42");
        let mut store = JourneyStore::new(storage);
        let report = store.restore();
        assert!(report.found);
        assert_eq!(report.defaulted.len(), SLICE_KEYS.len());
        assert_eq!(store.journey(), &Journey::default());
    }

    #[test]
    fn test_reset_clears_storage() {
        let mut store = JourneyStore::with_key(MemoryStorage::new(), "custom", Journey::with_age(45));
        store.set_cash_flow(CashFlow::from_parts(10.0, BTreeMap::new()));
        store.persist().unwrap();
        assert!(store.storage().contains("custom"));

        store.reset().unwrap();

        assert!(!store.storage().contains("custom"));
        assert_eq!(store.journey(), &Journey::with_age(45));
    }

    #[test]
    fn test_setters_replace_whole_slice() {
        let mut store = JourneyStore::new(MemoryStorage::new());
        store.set_cash_flow(CashFlow::from_parts(100.0, BTreeMap::from([("A".to_string(), 10.0)])));
        store.set_cash_flow(CashFlow::from_parts(200.0, BTreeMap::from([("B".to_string(), 20.0)])));
        assert_eq!(store.cash_flow().monthly_expenses.len(), 1);
        assert!(store.cash_flow().monthly_expenses.contains_key("B"));
    }

    #[test]
    fn test_tracking_records_append_and_remove() {
        let mut store = JourneyStore::new(MemoryStorage::new());
        for month in ["2026-01", "2026-02", "2026-03"] {
            store.append_tracking_record(TrackingEntry {
                month: month.to_string(),
                income: 100.0,
                expenses: 40.0,
                investment: 0.0,
                notes: String::new(),
            });
        }
        assert_eq!(store.tracking_history()[0].net_cash_flow, 60.0);

        let removed = store.remove_tracking_record(1).unwrap();
        assert_eq!(removed.month, "2026-02");
        assert_eq!(store.tracking_history().len(), 2);
        assert!(store.remove_tracking_record(5).is_none());
    }

    fn whole_amount() -> impl Strategy<Value = f64> {
        (0u32..50_000_000).prop_map(f64::from)
    }

    fn name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,11}"
    }

    prop_compose! {
        fn arb_tracking_record()(
            year in 2000i32..2100,
            month in 1u32..=12,
            income in whole_amount(),
            expenses in whole_amount(),
            investment in whole_amount(),
            notes in "[a-z ]{0,10}",
            secs in 0i64..4_000_000_000,
        ) -> TrackingRecord {
            TrackingEntry {
                month: format!("{:04}-{:02}", year, month),
                income,
                expenses,
                investment,
                notes,
            }
            .into_record(chrono::DateTime::from_timestamp(secs, 0).unwrap())
        }
    }

    prop_compose! {
        fn arb_journey()(
            step in 1u8..=8,
            income in whole_amount(),
            expenses in proptest::collection::btree_map(name(), whole_amount(), 0..6),
            assets in proptest::collection::vec((name(), whole_amount()), 0..5),
            liabilities in proptest::collection::vec((name(), whole_amount()), 0..5),
            goals in proptest::collection::vec((name(), whole_amount(), 1u32..480, 1u8..=10), 0..4),
            risk in (1u32..=9, 1u32..=9),
            protection in (0u32..=10, 1u32..=12, proptest::collection::btree_map(name(), any::<bool>(), 0..4)),
            age in 18u32..100,
            equity in proptest::option::of(0u32..=100),
            tracking_history in proptest::collection::vec(arb_tracking_record(), 0..6),
        ) -> Journey {
            let (cyber_awareness, emergency_fund_months, insurance_needs) = protection;
            Journey {
                current_step: Step::from_number(step).unwrap(),
                cash_flow: CashFlow::from_parts(income, expenses),
                net_worth: NetWorth::from_items(
                    assets.into_iter().map(|(n, a)| LineItem::new(n, a)).collect(),
                    liabilities.into_iter().map(|(n, a)| LineItem::new(n, a)).collect(),
                ),
                goals: Goals {
                    goals: goals
                        .into_iter()
                        .enumerate()
                        .map(|(i, (name, target_amount, timeline, priority))| FinancialGoal {
                            id: format!("g{}", i),
                            name,
                            target_amount,
                            timeline,
                            category: "Other".to_string(),
                            priority,
                        })
                        .collect(),
                },
                risk_assessment: RiskAssessment::from_scores(risk.0, risk.1),
                wealth_protection: WealthProtection {
                    cyber_awareness,
                    emergency_fund_months,
                    insurance_needs,
                    protection_score: cyber_awareness / 2,
                },
                user_profile: UserProfile { age },
                recommendations: equity.map(|e| Recommendation {
                    equity_allocation: f64::from(e),
                    debt_allocation: f64::from(100 - e),
                    emergency_fund: income * 6.0,
                    investment_strategy: "Balanced".to_string(),
                    ..Default::default()
                }),
                tracking_history,
            }
        }
    }

    proptest! {
        #[test]
        fn prop_restore_after_persist_is_identity(journey in arb_journey()) {
            let mut store = JourneyStore::new(MemoryStorage::new());
            store.state = journey.clone();
            store.persist().unwrap();

            let mut fresh = JourneyStore::new(store.storage().clone());
            let report = fresh.restore();
            prop_assert!(report.is_clean(), "{:?}", report);
            prop_assert_eq!(fresh.journey(), &journey);
        }
    }
}
