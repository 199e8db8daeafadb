use chrono::{Datelike, Days, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::MealCatalog;
use crate::models::{DayPlan, DaySlot, DishEntry, Slot, WeekPlan};
use crate::planner::constants::{DAYS_PER_PLAN, weekday_name};
use crate::planner::exclusion::ExclusionSet;

/// Label shown for a plan day, e.g. `10월 17일 (토)`.
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "{}월 {}일 ({})",
        date.month(),
        date.day(),
        weekday_name(date.weekday())
    )
}

/// Draw up to `count` dishes uniformly at random without replacement.
///
/// Shuffles the whole pool (Fisher-Yates) and keeps the first `count`.
pub fn sample_dishes<R: Rng + ?Sized>(
    pool: &[&DishEntry],
    count: usize,
    rng: &mut R,
) -> Vec<DishEntry> {
    let mut shuffled: Vec<&DishEntry> = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled.into_iter().cloned().collect()
}

/// Draw the dishes for one slot of one day.
fn build_slot<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    exclusions: &ExclusionSet,
    slot: Slot,
    rng: &mut R,
) -> DaySlot {
    let candidates = catalog.entries_for_slot(slot);
    let mut pool = exclusions.filter_pool(candidates.iter().copied());

    // An empty slot is never valid; exclusions only bind while something is left.
    if pool.is_empty() && !candidates.is_empty() {
        tracing::warn!(%slot, "every dish is excluded, ignoring exclusions for this slot");
        pool = candidates;
    }

    let required = slot.required_count();
    let items = sample_dishes(&pool, required, rng);

    if items.len() < required {
        tracing::warn!(
            %slot,
            drawn = items.len(),
            required,
            "filtered pool smaller than required count"
        );
    }
    for item in &items {
        tracing::debug!(dish = %item.debug_string(), "drew dish");
    }

    DaySlot::new(slot, items)
}

/// Generate a full 7-day plan starting at `start_date`.
///
/// Never fails. Slots whose filtered pool is too small come back with fewer
/// dishes and a non-zero [`DaySlot::shortfall`].
pub fn generate_week_plan<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    exclusions: &ExclusionSet,
    start_date: NaiveDate,
    rng: &mut R,
) -> WeekPlan {
    let mut days = Vec::with_capacity(DAYS_PER_PLAN as usize);

    for offset in 0..DAYS_PER_PLAN {
        let date = start_date
            .checked_add_days(Days::new(u64::from(offset)))
            .unwrap_or(start_date);

        let breakfast = build_slot(catalog, exclusions, Slot::Breakfast, rng);
        let lunch = build_slot(catalog, exclusions, Slot::Lunch, rng);
        let dinner = build_slot(catalog, exclusions, Slot::Dinner, rng);

        days.push(DayPlan::new(
            offset + 1,
            date_label(date),
            breakfast,
            lunch,
            dinner,
        ));
    }

    let plan = WeekPlan {
        generated_at: Utc::now(),
        days,
    };

    tracing::info!(
        start = %start_date,
        exclusions = exclusions.len(),
        dishes = plan.dish_count(),
        "generated week plan"
    );

    plan
}
