use crate::error::{PlannerError, Result};
use crate::models::{Slot, WeekPlan};
use crate::planner::RemoveOutcome;

/// Where the recommendation flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// No active plan.
    Idle,
    /// The user is changing exclusion terms.
    EditingExclusions,
    /// A generation request is outstanding.
    Generating,
    /// An active plan exists and may be edited or saved.
    Viewing,
}

impl FlowState {
    fn describe(self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::EditingExclusions => "editing exclusions",
            FlowState::Generating => "generating",
            FlowState::Viewing => "viewing a plan",
        }
    }
}

/// Handle for one outstanding generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// State machine holding the "current" plan between user actions.
///
/// Only one generation may be outstanding at a time, and only the result for
/// the outstanding ticket is accepted.
#[derive(Debug, Default)]
pub struct RecommendationSession {
    active: Option<WeekPlan>,
    pending: Option<GenerationTicket>,
    editing: bool,
    next_ticket: u64,
}

impl RecommendationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        if self.pending.is_some() {
            FlowState::Generating
        } else if self.editing {
            FlowState::EditingExclusions
        } else if self.active.is_some() {
            FlowState::Viewing
        } else {
            FlowState::Idle
        }
    }

    fn reject(&self, action: &'static str) -> PlannerError {
        PlannerError::InvalidTransition {
            action,
            state: self.state().describe(),
        }
    }

    pub fn begin_editing_exclusions(&mut self) -> Result<()> {
        if self.state() != FlowState::Idle {
            return Err(self.reject("edit exclusions"));
        }
        self.editing = true;
        Ok(())
    }

    pub fn finish_editing_exclusions(&mut self) -> Result<()> {
        if self.state() != FlowState::EditingExclusions {
            return Err(self.reject("finish editing exclusions"));
        }
        self.editing = false;
        Ok(())
    }

    /// Start a generation. Rejected while another one is outstanding.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket> {
        match self.state() {
            FlowState::Generating => {
                tracing::warn!("ignoring generate request while a generation is outstanding");
                Err(PlannerError::GenerationInProgress)
            }
            FlowState::EditingExclusions => Err(self.reject("generate")),
            FlowState::Idle | FlowState::Viewing => {
                self.next_ticket += 1;
                let ticket = GenerationTicket(self.next_ticket);
                self.pending = Some(ticket);
                Ok(ticket)
            }
        }
    }

    /// Install the result of the outstanding generation as the active plan.
    pub fn complete_generation(&mut self, ticket: GenerationTicket, plan: WeekPlan) -> Result<&WeekPlan> {
        if self.pending != Some(ticket) {
            return Err(PlannerError::StaleGeneration);
        }
        self.pending = None;
        Ok(&*self.active.insert(plan))
    }

    /// Drop an outstanding generation, keeping any previous plan.
    pub fn abandon_generation(&mut self, ticket: GenerationTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
    }

    /// Return to idle, discarding the active plan.
    pub fn start_over(&mut self) {
        self.active = None;
        self.pending = None;
        self.editing = false;
    }

    pub fn active_plan(&self) -> Option<&WeekPlan> {
        match self.state() {
            FlowState::Viewing => self.active.as_ref(),
            _ => None,
        }
    }

    /// Remove a dish from the active plan.
    pub fn remove_item(&mut self, day_index: u8, slot: Slot, item_index: usize) -> Result<RemoveOutcome> {
        if self.state() != FlowState::Viewing {
            return Err(PlannerError::NoActivePlan);
        }
        let plan = self.active.as_mut().ok_or(PlannerError::NoActivePlan)?;
        Ok(plan.remove_item(day_index, slot, item_index))
    }
}
