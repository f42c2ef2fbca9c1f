//! Wizard - step navigation over a journey store
//!
//! Every transition persists the journey before the index changes and again
//! once the new index is in place, so the stored `currentStep` always matches
//! what is shown.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Step;
use crate::store::{JourneyStore, RestoreReport, Storage, StoreError};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Step {0} is out of range (1-{total})", total = crate::TOTAL_STEPS)]
    OutOfRange(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The shown step changed; the view should scroll back to the top
    Moved { from: Step, to: Step },
    /// Already at the boundary or target, nothing changed
    Stayed,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

pub struct Wizard<S: Storage> {
    store: JourneyStore<S>,
    mounted: bool,
}

impl<S: Storage> Wizard<S> {
    pub fn new(store: JourneyStore<S>) -> Self {
        Self { store, mounted: false }
    }

    /// Restore the persisted journey; only the first call does anything
    pub fn mount(&mut self) -> Option<RestoreReport> {
        if self.mounted {
            debug!("Wizard::mount: already mounted");
            return None;
        }
        self.mounted = true;
        let report = self.store.restore();
        info!(step = %self.store.current_step(), found = report.found, "Wizard mounted");
        Some(report)
    }

    pub fn store(&self) -> &JourneyStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut JourneyStore<S> {
        &mut self.store
    }

    pub fn into_store(self) -> JourneyStore<S> {
        self.store
    }

    pub fn current_step(&self) -> Step {
        self.store.current_step()
    }

    /// Advance one step; a no-op on the last step
    pub fn next(&mut self) -> Result<Transition, NavigationError> {
        debug!(step = %self.current_step(), "Wizard::next: called");
        match self.current_step().next() {
            Some(to) => Ok(self.transition(to)?),
            None => Ok(Transition::Stayed),
        }
    }

    /// Go back one step; a no-op on the first step
    pub fn previous(&mut self) -> Result<Transition, NavigationError> {
        debug!(step = %self.current_step(), "Wizard::previous: called");
        match self.current_step().previous() {
            Some(to) => Ok(self.transition(to)?),
            None => Ok(Transition::Stayed),
        }
    }

    /// Jump straight to step `number`, skipping any steps in between
    pub fn jump_to(&mut self, number: i64) -> Result<Transition, NavigationError> {
        debug!(number, "Wizard::jump_to: called");
        let to = u8::try_from(number)
            .ok()
            .and_then(Step::from_number)
            .ok_or(NavigationError::OutOfRange(number))?;
        Ok(self.transition(to)?)
    }

    fn transition(&mut self, to: Step) -> Result<Transition, StoreError> {
        let from = self.current_step();
        self.store.persist()?;
        if from == to {
            debug!(%to, "Wizard::transition: already on target");
            return Ok(Transition::Stayed);
        }
        self.store.set_current_step(to);
        self.store.persist()?;
        info!(%from, %to, "Step changed");
        Ok(Transition::Moved { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Journey;
    use crate::store::MemoryStorage;

    fn wizard() -> Wizard<MemoryStorage> {
        let mut wizard = Wizard::new(JourneyStore::new(MemoryStorage::new()));
        wizard.mount();
        wizard
    }

    fn stored_step(wizard: &Wizard<MemoryStorage>) -> Option<Step> {
        let raw = wizard.store().storage().get(crate::STORAGE_KEY).unwrap()?;
        let journey: Journey = serde_json::from_str(&raw).unwrap();
        Some(journey.current_step)
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut wizard = wizard();
        assert_eq!(wizard.previous().unwrap(), Transition::Stayed);
        assert_eq!(wizard.current_step(), Step::CashFlow);
        assert_eq!(stored_step(&wizard), None);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let mut wizard = wizard();
        wizard.jump_to(8).unwrap();
        assert_eq!(wizard.next().unwrap(), Transition::Stayed);
        assert_eq!(wizard.current_step(), Step::Status);
    }

    #[test]
    fn test_next_persists_new_step() {
        let mut wizard = wizard();
        let transition = wizard.next().unwrap();
        assert_eq!(
            transition,
            Transition::Moved {
                from: Step::CashFlow,
                to: Step::NetWorth
            }
        );
        assert!(transition.moved());
        assert_eq!(stored_step(&wizard), Some(Step::NetWorth));
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut wizard = wizard();
        for _ in 0..10 {
            wizard.next().unwrap();
        }
        assert_eq!(wizard.current_step(), Step::Status);
        for _ in 0..10 {
            wizard.previous().unwrap();
        }
        assert_eq!(wizard.current_step(), Step::CashFlow);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut wizard = wizard();
        wizard.jump_to(3).unwrap();
        for bad in [0, 9, -1, 300] {
            let err = wizard.jump_to(bad).unwrap_err();
            assert!(matches!(err, NavigationError::OutOfRange(n) if n == bad));
        }
        assert_eq!(wizard.current_step(), Step::Goals);
    }

    #[test]
    fn test_jump_to_current_persists_without_moving() {
        let mut wizard = wizard();
        assert_eq!(wizard.jump_to(1).unwrap(), Transition::Stayed);
        assert_eq!(stored_step(&wizard), Some(Step::CashFlow));
    }

    #[test]
    fn test_mount_restores_once() {
        let mut first = wizard();
        first.jump_to(5).unwrap();
        let storage = first.into_store().storage().clone();

        let mut second = Wizard::new(JourneyStore::new(storage));
        assert!(second.mount().unwrap().found);
        assert_eq!(second.current_step(), Step::Protection);

        second.store_mut().set_current_step(Step::Goals);
        assert!(second.mount().is_none());
        assert_eq!(second.current_step(), Step::Goals);
    }

    #[test]
    fn test_transition_saves_unsaved_slices() {
        let mut wizard = wizard();
        wizard.store_mut().set_user_profile(crate::domain::UserProfile { age: 61 });
        wizard.next().unwrap();

        let raw = wizard.store().storage().get(crate::STORAGE_KEY).unwrap().unwrap();
        let journey: Journey = serde_json::from_str(&raw).unwrap();
        assert_eq!(journey.user_profile.age, 61);
    }
}
