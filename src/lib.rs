pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::MealCatalog;
pub use error::{PlannerError, Result};
pub use models::{DayPlan, DaySlot, DishEntry, NutritionTotals, SavedPlan, Slot, WeekPlan};
pub use planner::{ExclusionSet, RemoveOutcome, generate_week_plan, remove_item};
pub use state::{FileStore, KeyValueStore, MealPlanManager, MemoryStore};
