use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// A meal category.
///
/// Snack dishes live in the catalog but are never drawn into a weekly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Slot {
    /// Slots that make up a day of a weekly plan, in display order.
    pub const PLANNED: [Slot; 3] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner];

    pub const ALL: [Slot; 4] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner, Slot::Snack];

    /// Number of dishes the generator draws for this slot each day.
    pub fn required_count(self) -> usize {
        match self {
            Slot::Breakfast => 2,
            Slot::Lunch => 3,
            Slot::Dinner => 3,
            Slot::Snack => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Breakfast => "breakfast",
            Slot::Lunch => "lunch",
            Slot::Dinner => "dinner",
            Slot::Snack => "snack",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Slot::Breakfast),
            "lunch" => Ok(Slot::Lunch),
            "dinner" => Ok(Slot::Dinner),
            "snack" => Ok(Slot::Snack),
            other => Err(PlannerError::InvalidInput(format!("unknown slot '{}'", other))),
        }
    }
}

/// Aggregated calories and macronutrients for a set of dishes.
///
/// Never authored by hand: build it with [`NutritionTotals::of`] or by adding
/// dish contributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: u32,
    pub carbs_grams: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
}

impl NutritionTotals {
    /// Field-wise sum over a set of dishes.
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a DishEntry>,
    {
        items.into_iter().map(DishEntry::nutrition).sum()
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(rhs.calories),
            carbs_grams: self.carbs_grams.saturating_add(rhs.carbs_grams),
            protein_grams: self.protein_grams.saturating_add(rhs.protein_grams),
            fat_grams: self.fat_grams.saturating_add(rhs.fat_grams),
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for NutritionTotals {
    fn sub_assign(&mut self, rhs: Self) {
        self.calories = self.calories.saturating_sub(rhs.calories);
        self.carbs_grams = self.carbs_grams.saturating_sub(rhs.carbs_grams);
        self.protein_grams = self.protein_grams.saturating_sub(rhs.protein_grams);
        self.fat_grams = self.fat_grams.saturating_sub(rhs.fat_grams);
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A dish in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishEntry {
    pub name: String,
    pub slot: Slot,
    pub calories: u32,
    pub carbs_grams: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
}

impl DishEntry {
    pub fn new(
        name: impl Into<String>,
        slot: Slot,
        calories: u32,
        carbs_grams: u32,
        protein_grams: u32,
        fat_grams: u32,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            calories,
            carbs_grams,
            protein_grams,
            fat_grams,
        }
    }

    /// This dish's contribution to any totals it is part of.
    #[inline]
    pub fn nutrition(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            carbs_grams: self.carbs_grams,
            protein_grams: self.protein_grams,
            fat_grams: self.fat_grams,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, C:{}g P:{}g F:{}g",
            self.name, self.slot, self.calories, self.carbs_grams, self.protein_grams, self.fat_grams
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dish(name: &str, cal: u32, c: u32, p: u32, f: u32) -> DishEntry {
        DishEntry::new(name, Slot::Lunch, cal, c, p, f)
    }

    #[test]
    fn test_totals_of_items() {
        let items = vec![
            sample_dish("Rice", 300, 65, 6, 2),
            sample_dish("Soup", 150, 5, 14, 8),
        ];
        let totals = NutritionTotals::of(&items);
        assert_eq!(totals.calories, 450);
        assert_eq!(totals.carbs_grams, 70);
        assert_eq!(totals.protein_grams, 20);
        assert_eq!(totals.fat_grams, 10);
    }

    #[test]
    fn test_totals_of_nothing_is_zero() {
        let items: Vec<DishEntry> = Vec::new();
        assert_eq!(NutritionTotals::of(&items), NutritionTotals::default());
    }

    #[test]
    fn test_sub_assign_reverses_add() {
        let a = sample_dish("A", 100, 10, 5, 2).nutrition();
        let b = sample_dish("B", 250, 20, 15, 9).nutrition();
        let mut total = a + b;
        total -= b;
        assert_eq!(total, a);
    }

    #[test]
    fn test_sub_assign_saturates() {
        let mut small = sample_dish("A", 10, 1, 1, 1).nutrition();
        small -= sample_dish("B", 100, 10, 10, 10).nutrition();
        assert_eq!(small, NutritionTotals::default());
    }

    #[test]
    fn test_sum_saturates_on_huge_values() {
        let huge = DishEntry::new("mega shake", Slot::Breakfast, 3_000_000_000, 1, 1, u32::MAX);
        let totals = NutritionTotals::of([&huge, &huge]);
        assert_eq!(totals.calories, u32::MAX);
        assert_eq!(totals.carbs_grams, 2);
        assert_eq!(totals.fat_grams, u32::MAX);
    }

    #[test]
    fn test_slot_parse_case_insensitive() {
        assert_eq!("Dinner".parse::<Slot>().unwrap(), Slot::Dinner);
        assert_eq!(" snack ".parse::<Slot>().unwrap(), Slot::Snack);
        assert!("brunch".parse::<Slot>().is_err());
    }

    #[test]
    fn test_required_counts() {
        assert_eq!(Slot::Breakfast.required_count(), 2);
        assert_eq!(Slot::Lunch.required_count(), 3);
        assert_eq!(Slot::Dinner.required_count(), 3);
        assert_eq!(Slot::Snack.required_count(), 0);
    }

    #[test]
    fn test_dish_json_shape() {
        let dish = DishEntry::new("Salad", Slot::Dinner, 70, 12, 2, 2);
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["slot"], "dinner");
        assert_eq!(json["carbsGrams"], 12);
        assert_eq!(json["fatGrams"], 2);
    }
}
