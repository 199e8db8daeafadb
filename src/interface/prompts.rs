use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Slot, WeekPlan};
use crate::planner::constants::SUGGESTION_THRESHOLD;

/// What the user wants to do with the active plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    RemoveDish,
    Save,
    Regenerate,
    StartOver,
    Quit,
}

/// Ask what to do next with the active plan.
pub fn prompt_plan_action() -> Result<PlanAction> {
    let actions = [
        ("Remove a dish", PlanAction::RemoveDish),
        ("Save this plan", PlanAction::Save),
        ("Generate again", PlanAction::Regenerate),
        ("Start over", PlanAction::StartOver),
        ("Quit", PlanAction::Quit),
    ];
    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(PlanAction::Quit))
}

/// Walk the user to a single dish: day, then slot, then item.
///
/// Returns `None` if they back out at any step.
pub fn prompt_dish_to_remove(plan: &WeekPlan) -> Result<Option<(u8, Slot, usize)>> {
    let mut days: Vec<String> = plan
        .days
        .iter()
        .map(|d| format!("Day {} - {}", d.day_index, d.date_label))
        .collect();
    days.push("Back".to_string());

    let day_pick = Select::new()
        .with_prompt("Which day?")
        .items(&days)
        .default(0)
        .interact()?;
    let Some(day) = plan.days.get(day_pick) else {
        return Ok(None);
    };

    let mut slots: Vec<String> = day
        .slots()
        .iter()
        .map(|s| format!("{} ({} dishes)", s.slot, s.len()))
        .collect();
    slots.push("Back".to_string());

    let slot_pick = Select::new()
        .with_prompt("Which meal?")
        .items(&slots)
        .default(0)
        .interact()?;
    let Some(day_slot) = day.slots().get(slot_pick).copied() else {
        return Ok(None);
    };

    let mut items: Vec<String> = day_slot
        .items
        .iter()
        .map(|d| format!("{} - {} kcal", d.name, d.calories))
        .collect();
    items.push("Back".to_string());

    let item_pick = Select::new()
        .with_prompt("Remove which dish?")
        .items(&items)
        .default(0)
        .interact()?;
    if item_pick >= day_slot.items.len() {
        return Ok(None);
    }

    Ok(Some((day.day_index, day_slot.slot, item_pick)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Closest candidate to `input` by Jaro-Winkler similarity, if any is close enough.
pub fn suggest_term<'a>(input: &str, candidates: &'a [String]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    candidates
        .iter()
        .map(|c| (c.as_str(), jaro_winkler(&c.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}
