use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// week_menu: weekly meal-plan recommender with ingredient exclusions.
#[derive(Parser, Debug)]
#[command(name = "week_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding persisted exclusions and saved plans.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Custom catalog JSON file (defaults to the built-in dishes).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file path.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a 7-day meal plan, then edit and save it.
    Generate {
        /// First day of the plan (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start: Option<String>,

        /// Seed the random draw for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan and exit without the edit menu.
        #[arg(long)]
        no_interactive: bool,
    },

    /// Manage excluded ingredient terms.
    Exclude {
        #[command(subcommand)]
        action: ExcludeAction,
    },

    /// Inspect saved plans.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List catalog dishes.
    Catalog {
        /// Only show one slot (breakfast, lunch, dinner, snack).
        #[arg(long)]
        slot: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExcludeAction {
    /// Add a term; dishes whose name contains it are skipped.
    Add { term: String },

    /// Remove a term.
    Remove { term: String },

    /// Show stored terms.
    List,
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved plans, newest first.
    List,

    /// Show one saved plan.
    Show { id: u64 },

    /// Delete a saved plan.
    Delete { id: u64 },

    /// Write a saved plan to CSV.
    Export {
        id: u64,

        /// Output file.
        #[arg(short, long, default_value = "meal_plan.csv")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            start: None,
            seed: None,
            no_interactive: false,
        }
    }
}
