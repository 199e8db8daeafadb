use crate::models::{DishEntry, Slot, WeekPlan};

/// What happened to a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The dish was removed and every affected total updated.
    Removed(DishEntry),
    /// The slot holds a single dish; slots never become empty.
    LastItemKept,
    /// Day, slot or item index does not exist.
    OutOfRange,
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed(_))
    }
}

impl WeekPlan {
    /// Remove one dish, keeping slot and day totals in step with the items.
    ///
    /// The plan is left untouched unless the outcome is `Removed`.
    pub fn remove_item(&mut self, day_index: u8, slot: Slot, item_index: usize) -> RemoveOutcome {
        let Some(day) = self.day_mut(day_index) else {
            return RemoveOutcome::OutOfRange;
        };
        let Some(day_slot) = day.slot_mut(slot) else {
            return RemoveOutcome::OutOfRange;
        };
        if item_index >= day_slot.items.len() {
            return RemoveOutcome::OutOfRange;
        }
        if day_slot.items.len() == 1 {
            return RemoveOutcome::LastItemKept;
        }

        let removed = day_slot.items.remove(item_index);
        let contribution = removed.nutrition();
        day_slot.totals -= contribution;
        day.totals -= contribution;

        tracing::debug!(day_index, %slot, dish = %removed.name, "removed dish from plan");
        RemoveOutcome::Removed(removed)
    }
}

/// Value-style wrapper around [`WeekPlan::remove_item`].
pub fn remove_item(mut plan: WeekPlan, day_index: u8, slot: Slot, item_index: usize) -> WeekPlan {
    plan.remove_item(day_index, slot, item_index);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, DaySlot, NutritionTotals};
    use chrono::Utc;

    fn dish(name: &str, slot: Slot, cal: u32, c: u32, p: u32, f: u32) -> DishEntry {
        DishEntry::new(name, slot, cal, c, p, f)
    }

    fn sample_plan() -> WeekPlan {
        let day = DayPlan::new(
            1,
            "1월 5일 (월)".to_string(),
            DaySlot::new(
                Slot::Breakfast,
                vec![
                    dish("Toast", Slot::Breakfast, 160, 28, 8, 2),
                    dish("Egg", Slot::Breakfast, 155, 1, 13, 11),
                ],
            ),
            DaySlot::new(Slot::Lunch, vec![dish("Bibimbap", Slot::Lunch, 550, 85, 18, 14)]),
            DaySlot::new(
                Slot::Dinner,
                vec![
                    dish("Fish", Slot::Dinner, 290, 0, 26, 20),
                    dish("Salad", Slot::Dinner, 70, 12, 2, 2),
                    dish("Rice", Slot::Dinner, 150, 32, 3, 1),
                ],
            ),
        );
        WeekPlan {
            generated_at: Utc::now(),
            days: vec![day],
        }
    }

    #[test]
    fn test_remove_from_two_item_slot() {
        let mut plan = sample_plan();
        let outcome = plan.remove_item(1, Slot::Breakfast, 0);

        assert!(outcome.is_removed());
        let day = plan.day(1).unwrap();
        assert_eq!(day.breakfast.len(), 1);
        assert_eq!(day.breakfast.items[0].name, "Egg");
        assert_eq!(day.breakfast.totals, day.breakfast.items[0].nutrition());
        assert_eq!(
            day.totals,
            day.breakfast.totals + day.lunch.totals + day.dinner.totals
        );
    }

    #[test]
    fn test_last_item_is_kept() {
        let mut plan = sample_plan();
        let before = plan.clone();

        assert_eq!(plan.remove_item(1, Slot::Lunch, 0), RemoveOutcome::LastItemKept);
        assert_eq!(plan, before);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut plan = sample_plan();
        let before = plan.clone();

        assert_eq!(plan.remove_item(2, Slot::Dinner, 0), RemoveOutcome::OutOfRange);
        assert_eq!(plan.remove_item(1, Slot::Dinner, 3), RemoveOutcome::OutOfRange);
        assert_eq!(plan.remove_item(1, Slot::Snack, 0), RemoveOutcome::OutOfRange);
        assert_eq!(plan, before);
    }

    #[test]
    fn test_repeated_removal_stops_at_one() {
        let mut plan = sample_plan();
        assert!(plan.remove_item(1, Slot::Dinner, 2).is_removed());
        assert!(plan.remove_item(1, Slot::Dinner, 0).is_removed());
        assert_eq!(plan.remove_item(1, Slot::Dinner, 0), RemoveOutcome::LastItemKept);

        let dinner = &plan.day(1).unwrap().dinner;
        assert_eq!(dinner.items.len(), 1);
        assert_eq!(dinner.items[0].name, "Salad");
        assert_eq!(dinner.totals, NutritionTotals::of(&dinner.items));
    }

    #[test]
    fn test_value_style_remove() {
        let plan = remove_item(sample_plan(), 1, Slot::Dinner, 0);
        let day = plan.day(1).unwrap();
        assert_eq!(day.dinner.len(), 2);
        assert_eq!(day.totals.calories, 160 + 155 + 550 + 70 + 150);
    }
}
