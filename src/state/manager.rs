use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{SavedPlan, Slot, WeekPlan};
use crate::planner::{ExclusionSet, RemoveOutcome, generate_week_plan};
use crate::state::exclusions::{load_exclusions, save_exclusions};
use crate::state::history::PlanHistory;
use crate::state::persistence::KeyValueStore;
use crate::state::session::{FlowState, RecommendationSession};

/// Everything the UI layer talks to: catalog, exclusions, the active plan and
/// the saved-plan history, all backed by one key-value store.
pub struct MealPlanManager<S: KeyValueStore> {
    kv: S,
    catalog: MealCatalog,
    exclusions: ExclusionSet,
    history: PlanHistory,
    session: RecommendationSession,
    generation_delay: Duration,
}

impl<S: KeyValueStore> MealPlanManager<S> {
    /// Open a manager, loading exclusions and history from `kv`.
    pub fn open(kv: S, catalog: MealCatalog) -> Result<Self> {
        catalog.validate()?;
        let exclusions = load_exclusions(&kv)?;
        let history = PlanHistory::load(&kv)?;

        tracing::debug!(
            dishes = catalog.len(),
            exclusions = exclusions.len(),
            saved_plans = history.len(),
            "opened meal plan manager"
        );

        Ok(Self {
            kv,
            catalog,
            exclusions,
            history,
            session: RecommendationSession::new(),
            generation_delay: Duration::ZERO,
        })
    }

    /// Pause for `delay` before each generated plan is handed back.
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Add and persist an exclusion term. Returns `false` if nothing changed.
    pub fn add_exclusion(&mut self, term: &str) -> Result<bool> {
        let mut updated = self.exclusions.clone();
        if !updated.add(term) {
            return Ok(false);
        }
        save_exclusions(&mut self.kv, &updated)?;
        self.exclusions = updated;
        tracing::info!(term = %term.trim().to_lowercase(), "added exclusion");
        Ok(true)
    }

    /// Remove and persist an exclusion term. Returns `false` if it was absent.
    pub fn remove_exclusion(&mut self, term: &str) -> Result<bool> {
        let mut updated = self.exclusions.clone();
        if !updated.remove(term) {
            return Ok(false);
        }
        save_exclusions(&mut self.kv, &updated)?;
        self.exclusions = updated;
        tracing::info!(term = %term.trim().to_lowercase(), "removed exclusion");
        Ok(true)
    }

    pub fn flow_state(&self) -> FlowState {
        self.session.state()
    }

    pub fn begin_editing_exclusions(&mut self) -> Result<()> {
        self.session.begin_editing_exclusions()
    }

    pub fn finish_editing_exclusions(&mut self) -> Result<()> {
        self.session.finish_editing_exclusions()
    }

    /// Generate a fresh plan and make it the active one.
    ///
    /// Fails with [`PlannerError::GenerationInProgress`] if a generation is
    /// already outstanding.
    pub fn generate_week_plan<R: Rng + ?Sized>(
        &mut self,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> Result<&WeekPlan> {
        let ticket = self.session.begin_generation()?;
        let plan = generate_week_plan(&self.catalog, &self.exclusions, start_date, rng);

        if !self.generation_delay.is_zero() {
            thread::sleep(self.generation_delay);
        }

        self.session.complete_generation(ticket, plan)
    }

    pub fn active_plan(&self) -> Option<&WeekPlan> {
        self.session.active_plan()
    }

    pub fn remove_item(&mut self, day_index: u8, slot: Slot, item_index: usize) -> Result<RemoveOutcome> {
        self.session.remove_item(day_index, slot, item_index)
    }

    /// Discard the active plan and return to idle.
    pub fn start_over(&mut self) {
        self.session.start_over();
    }

    /// Save the active plan into history.
    pub fn save_active(&mut self) -> Result<SavedPlan> {
        let plan = self
            .session
            .active_plan()
            .cloned()
            .ok_or(PlannerError::NoActivePlan)?;
        self.save(plan)
    }

    /// Save any plan into history.
    pub fn save(&mut self, plan: WeekPlan) -> Result<SavedPlan> {
        self.history.save(&mut self.kv, plan)
    }

    /// Saved plans, most-recent-first.
    pub fn saved_plans(&self) -> &[SavedPlan] {
        self.history.list()
    }

    pub fn saved_plan(&self, id: u64) -> Result<&SavedPlan> {
        self.history.get(id).ok_or(PlannerError::PlanNotFound(id))
    }

    /// Delete a saved plan. Unknown ids are a no-op returning `false`.
    pub fn delete_saved(&mut self, id: u64) -> Result<bool> {
        self.history.delete(&mut self.kv, id)
    }

    pub fn store(&self) -> &S {
        &self.kv
    }
}
