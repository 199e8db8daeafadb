mod exclusions;
mod history;
mod manager;
mod persistence;
mod session;

pub use exclusions::{load_exclusions, save_exclusions};
pub use history::PlanHistory;
pub use manager::MealPlanManager;
pub use persistence::{EXCLUSIONS_KEY, FileStore, KeyValueStore, MemoryStore, SAVED_PLANS_KEY};
pub use session::{FlowState, GenerationTicket, RecommendationSession};
