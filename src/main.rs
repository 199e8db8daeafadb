use chrono::{Local, NaiveDate};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use week_menu_rs::catalog::MealCatalog;
use week_menu_rs::cli::{Cli, Command, ExcludeAction, HistoryAction};
use week_menu_rs::config::{Config, ConfigOverrides};
use week_menu_rs::error::{PlannerError, Result};
use week_menu_rs::interface::{
    PlanAction, display_catalog, display_day, display_exclusions, display_saved_plans,
    display_week_plan, export_plan_csv, prompt_dish_to_remove, prompt_plan_action, prompt_yes_no, suggest_term,
};
use week_menu_rs::logging;
use week_menu_rs::models::Slot;
use week_menu_rs::planner::RemoveOutcome;
use week_menu_rs::state::{FileStore, MealPlanManager};

type Manager = MealPlanManager<FileStore>;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(&ConfigOverrides {
        data_dir: cli.data_dir.clone(),
        catalog: cli.catalog.clone(),
        config_file: cli.config.clone(),
    })?;
    let mut manager = open_manager(&config)?;

    match cli.command.unwrap_or_default() {
        Command::Generate {
            start,
            seed,
            no_interactive,
        } => cmd_generate(&mut manager, start.as_deref(), seed, no_interactive),
        Command::Exclude { action } => cmd_exclude(&mut manager, action),
        Command::History { action } => cmd_history(&mut manager, action),
        Command::Catalog { slot } => cmd_catalog(&manager, slot.as_deref()),
    }
}

fn open_manager(config: &Config) -> Result<Manager> {
    let catalog = match &config.catalog_path {
        Some(path) => MealCatalog::load(path)?,
        None => MealCatalog::builtin(),
    };
    let store = FileStore::new(&config.data_dir);
    Ok(MealPlanManager::open(store, catalog)?.with_generation_delay(config.generation_delay))
}

fn parse_start(start: Option<&str>) -> Result<NaiveDate> {
    match start {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a YYYY-MM-DD date", raw))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Generate a plan and let the user edit, save or regenerate it.
fn cmd_generate(
    manager: &mut Manager,
    start: Option<&str>,
    seed: Option<u64>,
    no_interactive: bool,
) -> Result<()> {
    let start = parse_start(start)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !manager.exclusions().is_empty() {
        display_exclusions(manager.exclusions());
    }
    println!("Generating a plan starting {}...", start);
    display_week_plan(manager.generate_week_plan(start, &mut rng)?);

    if no_interactive {
        return Ok(());
    }

    loop {
        match prompt_plan_action()? {
            PlanAction::RemoveDish => {
                let Some(plan) = manager.active_plan() else {
                    break;
                };
                let Some((day, slot, index)) = prompt_dish_to_remove(plan)? else {
                    continue;
                };
                match manager.remove_item(day, slot, index)? {
                    RemoveOutcome::Removed(dish) => {
                        println!("Removed {}.", dish.name);
                        if let Some(day_plan) = manager.active_plan().and_then(|p| p.day(day)) {
                            display_day(day_plan);
                        }
                    }
                    RemoveOutcome::LastItemKept => {
                        println!("Each meal needs at least one dish; nothing removed.");
                    }
                    RemoveOutcome::OutOfRange => println!("That dish no longer exists."),
                }
            }
            PlanAction::Save => {
                let saved = manager.save_active()?;
                println!("Saved plan {} ({}).", saved.id, saved.created_label);
            }
            PlanAction::Regenerate => {
                display_week_plan(manager.generate_week_plan(start, &mut rng)?);
            }
            PlanAction::StartOver => {
                if prompt_yes_no("Discard the current plan?", false)? {
                    manager.start_over();
                    println!("Plan discarded.");
                    break;
                }
            }
            PlanAction::Quit => break,
        }
    }

    Ok(())
}

fn cmd_exclude(manager: &mut Manager, action: ExcludeAction) -> Result<()> {
    manager.begin_editing_exclusions()?;

    match action {
        ExcludeAction::Add { term } => {
            if manager.add_exclusion(&term)? {
                println!("Excluding '{}'.", term.trim().to_lowercase());
            } else {
                println!("'{}' is already excluded or empty.", term.trim());
            }
        }
        ExcludeAction::Remove { term } => {
            if manager.remove_exclusion(&term)? {
                println!("No longer excluding '{}'.", term.trim().to_lowercase());
            } else {
                match suggest_term(&term, manager.exclusions().list()) {
                    Some(close) => println!("'{}' is not excluded. Did you mean '{}'?", term, close),
                    None => println!("'{}' is not excluded.", term),
                }
            }
        }
        ExcludeAction::List => {}
    }

    display_exclusions(manager.exclusions());
    manager.finish_editing_exclusions()
}

fn cmd_history(manager: &mut Manager, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => display_saved_plans(manager.saved_plans()),
        HistoryAction::Show { id } => {
            let saved = manager.saved_plan(id)?;
            println!("Saved {}", saved.created_label);
            display_week_plan(&saved.plan);
        }
        HistoryAction::Delete { id } => {
            if manager.delete_saved(id)? {
                println!("Deleted plan {}.", id);
            } else {
                println!("No saved plan {}.", id);
            }
        }
        HistoryAction::Export { id, out } => {
            let saved = manager.saved_plan(id)?;
            export_plan_csv(&saved.plan, &out)?;
            println!("Wrote plan {} to {}.", id, out.display());
        }
    }
    Ok(())
}

fn cmd_catalog(manager: &Manager, slot: Option<&str>) -> Result<()> {
    let slot: Option<Slot> = slot.map(str::parse::<Slot>).transpose()?;
    display_catalog(manager.catalog(), manager.exclusions(), slot);
    Ok(())
}
