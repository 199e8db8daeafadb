use crate::catalog::MealCatalog;
use crate::models::{DayPlan, DaySlot, NutritionTotals, SavedPlan, Slot, WeekPlan};
use crate::planner::ExclusionSet;

fn totals_line(totals: &NutritionTotals) -> String {
    format!(
        "{:>4} kcal | C {:>3}g P {:>3}g F {:>3}g",
        totals.calories, totals.carbs_grams, totals.protein_grams, totals.fat_grams
    )
}

fn slot_title(slot: Slot) -> &'static str {
    match slot {
        Slot::Breakfast => "Breakfast",
        Slot::Lunch => "Lunch",
        Slot::Dinner => "Dinner",
        Slot::Snack => "Snack",
    }
}

fn display_slot(slot: &DaySlot) {
    let note = if slot.is_under_filled() {
        format!("  (short by {})", slot.shortfall)
    } else {
        String::new()
    };
    println!("  {}  {}{}", slot_title(slot.slot), totals_line(&slot.totals), note);

    for (i, item) in slot.items.iter().enumerate() {
        println!("    {}. {} - {} kcal", i + 1, item.name, item.calories);
    }
}

/// Display one day with its slots.
pub fn display_day(day: &DayPlan) {
    println!("Day {} - {}", day.day_index, day.date_label);
    for slot in day.slots() {
        display_slot(slot);
    }
    println!("  Total      {}", totals_line(&day.totals));
    println!();
}

/// Display a whole week plan followed by a summary.
pub fn display_week_plan(plan: &WeekPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");
    println!();

    for day in &plan.days {
        display_day(day);
    }

    let total = plan.total_nutrition();
    println!("--- Summary ---");
    println!("Dishes: {}", plan.dish_count());
    println!("Week total: {}", totals_line(&total));
    println!("Daily average: {:.0} kcal", plan.average_daily_calories());

    let short = plan.under_filled_slots();
    if !short.is_empty() {
        println!(
            "{} slot(s) have fewer dishes than usual because of your exclusions.",
            short.len()
        );
    }
    println!();
}

/// Display the saved-plan history.
pub fn display_saved_plans(plans: &[SavedPlan]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    println!();
    println!("=== Saved Plans ({}) ===", plans.len());
    println!();
    for saved in plans {
        let first = saved.plan.days.first().map(|d| d.date_label.as_str()).unwrap_or("-");
        println!(
            "  {}  {}  starts {}  avg {:.0} kcal/day",
            saved.id,
            saved.created_label,
            first,
            saved.plan.average_daily_calories()
        );
    }
    println!();
}

/// Display stored exclusion terms.
pub fn display_exclusions(exclusions: &ExclusionSet) {
    if exclusions.is_empty() {
        println!("No excluded ingredients.");
        return;
    }
    println!("Excluded ingredients: {}", exclusions.list().join(", "));
}

/// Display catalog dishes, marking the ones current exclusions would skip.
pub fn display_catalog(catalog: &MealCatalog, exclusions: &ExclusionSet, only: Option<Slot>) {
    for slot in Slot::ALL {
        if only.is_some_and(|s| s != slot) {
            continue;
        }
        let entries = catalog.entries_for_slot(slot);
        println!();
        println!("=== {} ({} dishes) ===", slot_title(slot), entries.len());
        for dish in entries {
            let mark = if exclusions.is_excluded(&dish.name) { "  [excluded]" } else { "" };
            println!(
                "  {} - {}{}",
                dish.name,
                totals_line(&dish.nutrition()),
                mark
            );
        }
    }
    println!();
}
