//! Command execution shared by the one-shot CLI and the interactive journey
//!
//! A [`JourneySession`] owns the wizard and the plan integrations. Each
//! [`Command`] is applied to the journey and answered with a [`Reply`]: the
//! notices to show and the step view to print. Validation gaps and
//! integration failures become error notices; only storage failures are
//! returned as errors.

use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use crate::cli::{Command, GoalAction, ItemAction, PlanAction, TrackAction};
use crate::config::Config;
use crate::domain::{Journey, LineItem, RiskCategory, Step, UserProfile};
use crate::forms::{CashFlowForm, FormError, GoalDraft, GoalsForm, ItemKind, NetWorthForm, ProtectionForm, RiskForm};
use crate::notice::Notice;
use crate::plan::{
    ExplainClient, ExplainService, PlanError, PlanSource, Planner, RecommendationService, WebhookClient,
};
use crate::store::{FileStorage, JourneyStore, Storage, StoreError};
use crate::tracking::{TrackingEntry, TrackingSummary};
use crate::view::render_step;
use crate::wizard::{NavigationError, Transition, Wizard};

/// What to show after a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub notices: Vec<Notice>,
    pub body: Option<String>,
    /// The shown step changed; the screen starts from the top
    pub clear_screen: bool,
}

impl Reply {
    fn body(body: String) -> Self {
        Self {
            body: Some(body),
            ..Default::default()
        }
    }

    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Default::default()
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::notice(Notice::error(message))
    }

    fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    /// Any error notice
    pub fn failed(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }

    pub fn print(&self, clear: bool) {
        if clear && self.clear_screen {
            print!("\x1B[2J\x1B[H");
        }
        if let Some(body) = &self.body {
            println!("{}", body);
        }
        if !self.notices.is_empty() {
            if self.body.is_some() {
                println!();
            }
            for notice in &self.notices {
                println!("{}", notice.render());
            }
        }
    }
}

impl From<FormError> for Reply {
    fn from(e: FormError) -> Self {
        Reply::error(e.to_string())
    }
}

pub struct JourneySession<S: Storage> {
    wizard: Wizard<S>,
    planner: Planner,
    recommender: Box<dyn RecommendationService>,
    explainer: Box<dyn ExplainService>,
    last_explanation: Option<String>,
}

impl JourneySession<FileStorage> {
    /// Session over the configured storage directory and endpoints
    pub fn from_config(config: &Config) -> Result<Self> {
        debug!(dir = %config.storage.dir.display(), "JourneySession::from_config: called");
        let storage = FileStorage::open(&config.storage.dir).context("Failed to open journey storage")?;
        let store = JourneyStore::with_key(storage, config.storage.key.clone(), config.default_journey());
        let recommender = WebhookClient::from_config(&config.plan).context("Failed to create webhook client")?;
        let explainer = ExplainClient::from_config(&config.explain).context("Failed to create explain client")?;
        Ok(Self::new(
            Wizard::new(store),
            Planner::from_config(&config.plan),
            Box::new(recommender),
            Box::new(explainer),
        ))
    }
}

impl<S: Storage> JourneySession<S> {
    pub fn new(
        wizard: Wizard<S>,
        planner: Planner,
        recommender: Box<dyn RecommendationService>,
        explainer: Box<dyn ExplainService>,
    ) -> Self {
        Self {
            wizard,
            planner,
            recommender,
            explainer,
            last_explanation: None,
        }
    }

    /// Restore the saved journey; only the first call does anything
    pub fn mount(&mut self) -> Option<Reply> {
        let report = self.wizard.mount()?;
        let mut reply = Reply::default();
        if report.found && !report.is_clean() {
            reply = reply.with_notice(Notice::info(format!(
                "Some saved data could not be read, defaults used for: {}",
                report.defaulted.join(", ")
            )));
        }
        Some(reply)
    }

    pub fn journey(&self) -> &Journey {
        self.wizard.store().journey()
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    fn store_mut(&mut self) -> &mut JourneyStore<S> {
        self.wizard.store_mut()
    }

    fn view(&self, step: Step) -> String {
        render_step(self.journey(), step, self.last_explanation.as_deref())
    }

    /// Persist and show `step` with a success notice
    fn saved(&mut self, step: Step, message: &str) -> Result<Reply, StoreError> {
        self.store_mut().persist()?;
        info!(%step, "{}", message);
        Ok(Reply::body(self.view(step)).with_notice(Notice::success(message)))
    }

    fn navigated(&self, result: Result<Transition, NavigationError>) -> Result<Reply, StoreError> {
        match result {
            Ok(transition) => {
                let mut reply = Reply::body(self.view(self.current_step()));
                reply.clear_screen = transition.moved();
                Ok(reply)
            }
            Err(NavigationError::Store(e)) => Err(e),
            Err(e) => Ok(Reply::error(e.to_string())),
        }
    }

    pub async fn execute(&mut self, command: Command) -> Result<Reply, StoreError> {
        debug!(?command, "JourneySession::execute: called");
        match command {
            Command::Show => Ok(Reply::body(self.view(self.current_step()))),
            Command::Next => {
                let result = self.wizard.next();
                self.navigated(result)
            }
            Command::Prev => {
                let result = self.wizard.previous();
                self.navigated(result)
            }
            Command::Goto { step } => {
                let result = self.wizard.jump_to(step);
                self.navigated(result)
            }
            Command::CashFlow {
                income,
                expenses,
                removals,
            } => self.cash_flow(income, expenses, removals),
            Command::NetWorth { action } => self.net_worth(action),
            Command::Goals { action } => self.goals(action),
            Command::Risk { tolerance, capacity } => self.risk(tolerance, capacity),
            Command::Protection {
                cyber,
                clear_cyber,
                insurance,
                dropped,
                months,
            } => self.protection(cyber, clear_cyber, insurance, dropped, months),
            Command::Profile { age } => self.profile(age),
            Command::Plan { action } => self.plan(action).await,
            Command::Track { action } => self.track(action),
            Command::Status => Ok(Reply::body(self.view(Step::Status))),
            Command::Reset => {
                self.store_mut().reset()?;
                self.last_explanation = None;
                Ok(Reply::body(self.view(self.current_step())).with_notice(Notice::success("Journey reset")))
            }
            Command::Journey => Ok(Reply::notice(Notice::info("Already in the interactive journey"))),
        }
    }

    fn cash_flow(
        &mut self,
        income: Option<f64>,
        expenses: Vec<String>,
        removals: Vec<String>,
    ) -> Result<Reply, StoreError> {
        if income.is_none() && expenses.is_empty() && removals.is_empty() {
            return Ok(Reply::body(self.view(Step::CashFlow)));
        }

        let mut form = CashFlowForm::from_slice(&self.journey().cash_flow);
        if let Some(income) = income {
            if let Err(e) = form.set_income(income) {
                return Ok(e.into());
            }
        }
        for expense in &expenses {
            let Some((category, amount)) = expense.split_once('=') else {
                return Ok(Reply::error(format!("Expected CATEGORY=AMOUNT, got '{}'", expense)));
            };
            if let Err(e) = form.add_expense(category, amount) {
                return Ok(e.into());
            }
        }
        for category in &removals {
            if !form.remove_expense(category) {
                return Ok(Reply::error(format!("No expense named '{}'", category)));
            }
        }

        self.store_mut().set_cash_flow(form.save());
        self.saved(Step::CashFlow, "Cash flow saved")
    }

    fn net_worth(&mut self, action: Option<ItemAction>) -> Result<Reply, StoreError> {
        let Some(action) = action else {
            return Ok(Reply::body(self.view(Step::NetWorth)));
        };

        let mut form = NetWorthForm::from_slice(&self.journey().net_worth);
        let result = match action {
            ItemAction::Add { kind, name, amount } => form.add(kind.into(), &name, &amount).map(|_| ()),
            ItemAction::Remove { kind, position } => {
                let kind = ItemKind::from(kind);
                match item_at(&form, kind, position) {
                    Some(id) => form.remove(kind, &id),
                    None => return Ok(Reply::error(format!("No {} at position {}", kind, position))),
                }
            }
            ItemAction::Set {
                kind,
                position,
                amount,
            } => {
                let kind = ItemKind::from(kind);
                match item_at(&form, kind, position) {
                    Some(id) => form.set_amount(kind, &id, amount),
                    None => return Ok(Reply::error(format!("No {} at position {}", kind, position))),
                }
            }
        };
        if let Err(e) = result {
            return Ok(e.into());
        }

        self.store_mut().set_net_worth(form.save());
        self.saved(Step::NetWorth, "Net worth saved")
    }

    fn goals(&mut self, action: Option<GoalAction>) -> Result<Reply, StoreError> {
        let Some(action) = action else {
            return Ok(Reply::body(self.view(Step::Goals)));
        };

        let mut form = GoalsForm::from_slice(&self.journey().goals);
        let goal_at = |form: &GoalsForm, position: usize| {
            position
                .checked_sub(1)
                .and_then(|i| form.sorted().get(i).map(|goal| goal.id.clone()))
        };
        let result = match action {
            GoalAction::Add {
                name,
                target,
                months,
                category,
                priority,
            } => form
                .add(GoalDraft {
                    name,
                    target_amount: target,
                    timeline_months: months,
                    category: category.unwrap_or_default(),
                    priority,
                })
                .map(|_| ()),
            GoalAction::Remove { position } => match goal_at(&form, position) {
                Some(id) => form.remove(&id),
                None => return Ok(Reply::error(format!("No goal at position {}", position))),
            },
            GoalAction::Priority { position, priority } => match goal_at(&form, position) {
                Some(id) => form.set_priority(&id, priority),
                None => return Ok(Reply::error(format!("No goal at position {}", position))),
            },
        };
        if let Err(e) = result {
            return Ok(e.into());
        }

        self.store_mut().set_goals(form.save());
        self.saved(Step::Goals, "Goals saved")
    }

    fn risk(&mut self, tolerance: Vec<u32>, capacity: Vec<u32>) -> Result<Reply, StoreError> {
        if tolerance.is_empty() && capacity.is_empty() {
            return Ok(Reply::body(self.view(Step::RiskAssessment)));
        }

        let mut form = RiskForm::new();
        let answered = form
            .answer_all(RiskCategory::Tolerance, &tolerance)
            .and_then(|_| form.answer_all(RiskCategory::Capacity, &capacity))
            .and_then(|_| form.save());
        match answered {
            Ok(assessment) => {
                self.store_mut().set_risk_assessment(assessment);
                self.saved(Step::RiskAssessment, "Risk assessment saved")
            }
            Err(e) => Ok(e.into()),
        }
    }

    fn protection(
        &mut self,
        cyber: Vec<u8>,
        clear_cyber: bool,
        insurance: Vec<String>,
        dropped: Vec<String>,
        months: Option<u32>,
    ) -> Result<Reply, StoreError> {
        if cyber.is_empty() && !clear_cyber && insurance.is_empty() && dropped.is_empty() && months.is_none() {
            return Ok(Reply::body(self.view(Step::Protection)));
        }

        let mut form = ProtectionForm::from_slice(&self.journey().wealth_protection);
        if clear_cyber {
            form.clear_cyber();
        }
        if let Err(e) = apply_protection(&mut form, &cyber, &insurance, &dropped) {
            return Ok(e.into());
        }
        if let Some(months) = months {
            form.set_emergency_fund_months(months);
        }

        self.store_mut().set_wealth_protection(form.save());
        self.saved(Step::Protection, "Protection saved")
    }

    fn profile(&mut self, age: Option<u32>) -> Result<Reply, StoreError> {
        let Some(age) = age else {
            return Ok(Reply::body(format!("  Age: {}", self.journey().user_profile.age)));
        };
        self.store_mut().set_user_profile(UserProfile { age });
        self.store_mut().persist()?;
        Ok(Reply::notice(Notice::success(format!("Age set to {}", age))))
    }

    async fn plan(&mut self, action: Option<PlanAction>) -> Result<Reply, StoreError> {
        match action {
            None => Ok(Reply::body(self.view(Step::Plan))),
            Some(PlanAction::Generate) => {
                self.last_explanation = None;
                let result = self
                    .planner
                    .generate(self.wizard.store_mut(), self.recommender.as_ref())
                    .await;
                match result {
                    Ok(outcome) => {
                        let mut reply = Reply::body(self.view(Step::Plan)).with_notice(outcome.notice);
                        if outcome.source == PlanSource::Fallback
                            && let Some(reason) = outcome.fallback_reason
                        {
                            reply = reply.with_notice(Notice::info(format!("Webhook error: {}", reason)));
                        }
                        Ok(reply)
                    }
                    Err(PlanError::Store(e)) => Err(e),
                    Err(e) => Ok(Reply::error(e.to_string())),
                }
            }
            Some(PlanAction::Explain) => {
                let result = self
                    .planner
                    .explain(self.wizard.store().journey(), self.explainer.as_ref())
                    .await;
                match result {
                    Ok(text) => {
                        self.last_explanation = Some(text);
                        Ok(Reply::body(self.view(Step::Plan))
                            .with_notice(Notice::success("Local AI (Ollama) explanation generated!")))
                    }
                    Err(e) => Ok(Reply::error(e.user_message())),
                }
            }
        }
    }

    fn track(&mut self, action: Option<TrackAction>) -> Result<Reply, StoreError> {
        match action {
            None | Some(TrackAction::List) => Ok(Reply::body(self.view(Step::Track))),
            Some(TrackAction::Add {
                month,
                income,
                expenses,
                investment,
                notes,
            }) => match TrackingEntry::new(month, income, expenses, investment, notes) {
                Ok(entry) => {
                    self.store_mut().append_tracking_record(entry);
                    self.saved(Step::Track, "Tracking record added successfully!")
                }
                Err(e) => Ok(e.into()),
            },
            Some(TrackAction::Delete { position }) => {
                let index = TrackingSummary::from_history(self.wizard.store().tracking_history()).index_at(position);
                let Some(index) = index else {
                    return Ok(Reply::error(format!("No tracked month at position {}", position)));
                };
                self.store_mut().remove_tracking_record(index);
                self.saved(Step::Track, "Tracking record deleted")
            }
        }
    }
}

fn apply_protection(
    form: &mut ProtectionForm,
    cyber: &[u8],
    insurance: &[String],
    dropped: &[String],
) -> Result<(), FormError> {
    for id in cyber {
        form.set_cyber(*id, true)?;
    }
    for name in insurance {
        form.set_insurance(name, true)?;
    }
    for name in dropped {
        form.set_insurance(name, false)?;
    }
    Ok(())
}

/// ID of the item shown at 1-based `position`
fn item_at(form: &NetWorthForm, kind: ItemKind, position: usize) -> Option<String> {
    let items: &[LineItem] = match kind {
        ItemKind::Asset => form.assets(),
        ItemKind::Liability => form.liabilities(),
    };
    items.get(position.checked_sub(1)?).map(|item| item.id.clone())
}

/// Banner printed when the interactive journey starts
pub fn banner() -> String {
    format!(
        "{}\nType {} for help, {} to quit",
        "FinJourney".bright_cyan().bold(),
        "/help".yellow(),
        "/quit".yellow()
    )
}
