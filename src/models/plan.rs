use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dish::{DishEntry, NutritionTotals, Slot};

fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// The dishes drawn for one meal of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlot {
    pub slot: Slot,
    pub items: Vec<DishEntry>,
    pub totals: NutritionTotals,

    /// How many dishes the generator could not draw because the filtered
    /// pool was smaller than the slot's required count.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub shortfall: usize,
}

impl DaySlot {
    /// Build a slot whose totals are derived from `items`.
    pub fn new(slot: Slot, items: Vec<DishEntry>) -> Self {
        let totals = NutritionTotals::of(&items);
        let shortfall = slot.required_count().saturating_sub(items.len());
        Self {
            slot,
            items,
            totals,
            shortfall,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether generation returned fewer dishes than the slot asks for.
    pub fn is_under_filled(&self) -> bool {
        self.shortfall > 0
    }
}

/// One day of a weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based position within the week.
    pub day_index: u8,
    pub date_label: String,
    pub breakfast: DaySlot,
    pub lunch: DaySlot,
    pub dinner: DaySlot,
    pub totals: NutritionTotals,
}

impl DayPlan {
    pub fn new(
        day_index: u8,
        date_label: String,
        breakfast: DaySlot,
        lunch: DaySlot,
        dinner: DaySlot,
    ) -> Self {
        let totals = breakfast.totals + lunch.totals + dinner.totals;
        Self {
            day_index,
            date_label,
            breakfast,
            lunch,
            dinner,
            totals,
        }
    }

    /// Look up a planned slot. Snack is not part of a day and yields `None`.
    pub fn slot(&self, slot: Slot) -> Option<&DaySlot> {
        match slot {
            Slot::Breakfast => Some(&self.breakfast),
            Slot::Lunch => Some(&self.lunch),
            Slot::Dinner => Some(&self.dinner),
            Slot::Snack => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> Option<&mut DaySlot> {
        match slot {
            Slot::Breakfast => Some(&mut self.breakfast),
            Slot::Lunch => Some(&mut self.lunch),
            Slot::Dinner => Some(&mut self.dinner),
            Slot::Snack => None,
        }
    }

    /// The three planned slots in display order.
    pub fn slots(&self) -> [&DaySlot; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }
}

/// A complete 7-day plan produced by one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub generated_at: DateTime<Utc>,
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Look up a day by its 1-based index.
    pub fn day(&self, day_index: u8) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day_index == day_index)
    }

    pub(crate) fn day_mut(&mut self, day_index: u8) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.day_index == day_index)
    }

    /// Sum of every day's totals.
    pub fn total_nutrition(&self) -> NutritionTotals {
        self.days.iter().map(|d| d.totals).sum()
    }

    /// Mean calories per day across the plan.
    pub fn average_daily_calories(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.total_nutrition().calories as f64 / self.days.len() as f64
    }

    /// (day_index, slot) pairs that generation could not fill completely.
    pub fn under_filled_slots(&self) -> Vec<(u8, Slot)> {
        self.days
            .iter()
            .flat_map(|day| {
                day.slots()
                    .into_iter()
                    .filter(|s| s.is_under_filled())
                    .map(move |s| (day.day_index, s.slot))
            })
            .collect()
    }

    /// Number of dishes across all days and slots.
    pub fn dish_count(&self) -> usize {
        self.days
            .iter()
            .map(|d| d.slots().iter().map(|s| s.len()).sum::<usize>())
            .sum()
    }
}

/// A persisted snapshot of a week plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlan {
    /// Strictly increasing across saves; doubles as a creation timestamp in ms.
    pub id: u64,

    #[serde(rename = "date")]
    pub created_label: String,

    #[serde(rename = "meals")]
    pub plan: WeekPlan,
}
