use thiserror::Error;

use crate::models::Slot;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Saved plan not found: {0}")]
    PlanNotFound(u64),

    #[error("Catalog has no dishes for slot: {0}")]
    EmptySlot(Slot),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A meal plan is already being generated")]
    GenerationInProgress,

    #[error("Generation result is stale and was discarded")]
    StaleGeneration,

    #[error("No active meal plan")]
    NoActivePlan,

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
