pub mod constants;
pub mod exclusion;
pub mod generator;
pub mod mutator;

pub use constants::*;
pub use exclusion::ExclusionSet;
pub use generator::{date_label, generate_week_plan, sample_dishes};
pub use mutator::{RemoveOutcome, remove_item};
