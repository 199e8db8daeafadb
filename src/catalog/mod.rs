//! Read-only reference set of dishes grouped by meal slot.

mod data;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::{DishEntry, Slot};

pub use data::BUILTIN_DISHES;

/// The dish catalog the generator draws from.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    entries: Vec<DishEntry>,
}

impl MealCatalog {
    pub fn new(entries: Vec<DishEntry>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DISHES.clone())
    }

    /// Load a catalog from a JSON array of dishes.
    ///
    /// Deduplicates by lowercase name (last occurrence wins) while keeping the
    /// position of the first occurrence.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let dishes: Vec<DishEntry> = serde_json::from_str(&content)?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<DishEntry> = Vec::with_capacity(dishes.len());
        for dish in dishes {
            match index.get(&dish.key()) {
                Some(&i) => entries[i] = dish,
                None => {
                    index.insert(dish.key(), entries.len());
                    entries.push(dish);
                }
            }
        }

        tracing::debug!(dishes = entries.len(), "loaded custom catalog");
        Ok(Self::new(entries))
    }

    /// Every dish registered for `slot`, in catalog order.
    pub fn entries_for_slot(&self, slot: Slot) -> Vec<&DishEntry> {
        self.entries.iter().filter(|d| d.slot == slot).collect()
    }

    pub fn all(&self) -> &[DishEntry] {
        &self.entries
    }

    /// Check that every planned slot has at least one dish.
    pub fn validate(&self) -> Result<()> {
        for slot in Slot::PLANNED {
            if !self.entries.iter().any(|d| d.slot == slot) {
                return Err(PlannerError::EmptySlot(slot));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
