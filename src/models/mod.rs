mod dish;
mod plan;

pub use dish::{DishEntry, NutritionTotals, Slot};
pub use plan::{DayPlan, DaySlot, SavedPlan, WeekPlan};
