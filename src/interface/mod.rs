pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_plan_csv, write_plan_csv};
pub use prompts::{PlanAction, prompt_dish_to_remove, prompt_plan_action, prompt_yes_no, suggest_term};
pub use render::{
    display_catalog, display_day, display_exclusions, display_saved_plans, display_week_plan,
};
