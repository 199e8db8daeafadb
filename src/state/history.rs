use chrono::{DateTime, Local};

use crate::error::{PlannerError, Result};
use crate::models::{SavedPlan, WeekPlan};
use crate::planner::constants::{CREATED_LABEL_FORMAT, HISTORY_CAPACITY};
use crate::state::persistence::{KeyValueStore, SAVED_PLANS_KEY};

/// Bounded, most-recent-first history of saved plans.
#[derive(Debug, Clone, Default)]
pub struct PlanHistory {
    entries: Vec<SavedPlan>,
}

impl PlanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted history.
    ///
    /// Entries are reordered newest-first by id and cut to capacity. An
    /// unreadable value is logged and treated as an empty history, and
    /// entries whose id leaves no room for a successor are dropped.
    pub fn load<S: KeyValueStore + ?Sized>(kv: &S) -> Result<Self> {
        let Some(raw) = kv.get(SAVED_PLANS_KEY)? else {
            return Ok(Self::new());
        };

        let mut entries: Vec<SavedPlan> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, key = SAVED_PLANS_KEY, "discarding unreadable plan history");
                return Ok(Self::new());
            }
        };

        let before = entries.len();
        entries.retain(|e| e.id < u64::MAX);
        if entries.len() != before {
            tracing::warn!(
                dropped = before - entries.len(),
                key = SAVED_PLANS_KEY,
                "discarding saved plans with exhausted ids"
            );
        }

        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries.truncate(HISTORY_CAPACITY);
        Ok(Self { entries })
    }

    /// Save a plan stamped with the current local time.
    pub fn save<S: KeyValueStore + ?Sized>(&mut self, kv: &mut S, plan: WeekPlan) -> Result<SavedPlan> {
        self.save_at(kv, plan, Local::now())
    }

    /// Save a plan stamped with `now`.
    ///
    /// Ids are strictly increasing even when two saves share a millisecond.
    /// The oldest entry is evicted once the history exceeds its capacity.
    pub fn save_at<S: KeyValueStore + ?Sized>(
        &mut self,
        kv: &mut S,
        plan: WeekPlan,
        now: DateTime<Local>,
    ) -> Result<SavedPlan> {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = match self.entries.first() {
            Some(head) => {
                let next = head.id.checked_add(1).ok_or_else(|| {
                    PlannerError::InvalidInput(format!("saved plan id {} cannot be followed", head.id))
                })?;
                now_ms.max(next)
            }
            None => now_ms,
        };

        let saved = SavedPlan {
            id,
            created_label: now.format(CREATED_LABEL_FORMAT).to_string(),
            plan,
        };

        let mut entries = Vec::with_capacity(HISTORY_CAPACITY + 1);
        entries.push(saved.clone());
        entries.extend(self.entries.iter().cloned());
        let evicted: Vec<u64> = entries
            .iter()
            .skip(HISTORY_CAPACITY)
            .map(|e| e.id)
            .collect();
        entries.truncate(HISTORY_CAPACITY);

        persist(kv, &entries)?;
        self.entries = entries;

        for old in evicted {
            tracing::info!(id = old, "evicted oldest saved plan");
        }
        tracing::info!(id = saved.id, label = %saved.created_label, "saved meal plan");
        Ok(saved)
    }

    /// Saved plans, most-recent-first.
    pub fn list(&self) -> &[SavedPlan] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&SavedPlan> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Remove the entry with `id`. Unknown ids change nothing and skip the write.
    pub fn delete<S: KeyValueStore + ?Sized>(&mut self, kv: &mut S, id: u64) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let entries: Vec<SavedPlan> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();

        persist(kv, &entries)?;
        self.entries = entries;

        tracing::info!(id, "deleted saved plan");
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn persist<S: KeyValueStore + ?Sized>(kv: &mut S, entries: &[SavedPlan]) -> Result<()> {
    let json = serde_json::to_string(entries)?;
    kv.set(SAVED_PLANS_KEY, json)
}
