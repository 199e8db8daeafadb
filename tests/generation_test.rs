use assert_float_eq::assert_float_absolute_eq;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use week_menu_rs::catalog::MealCatalog;
use week_menu_rs::models::{NutritionTotals, Slot, WeekPlan};
use week_menu_rs::planner::{ExclusionSet, RemoveOutcome, generate_week_plan, remove_item};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn assert_aggregates_consistent(plan: &WeekPlan) {
    assert_eq!(plan.days.len(), 7, "plan must have 7 days");
    for day in &plan.days {
        for slot in day.slots() {
            assert!(!slot.items.is_empty(), "day {} {} is empty", day.day_index, slot.slot);
            assert_eq!(
                slot.totals,
                NutritionTotals::of(&slot.items),
                "stale slot totals on day {} {}",
                day.day_index,
                slot.slot
            );
        }
        assert_eq!(
            day.totals,
            day.breakfast.totals + day.lunch.totals + day.dinner.totals,
            "stale day totals on day {}",
            day.day_index
        );
    }
}

#[test]
fn test_generated_plans_have_consistent_totals() {
    let catalog = MealCatalog::builtin();
    let exclusions = ExclusionSet::new();
    let mut rng = StdRng::seed_from_u64(2024);

    // Randomized, so the two plans may differ, but both must hold the invariants
    let first = generate_week_plan(&catalog, &exclusions, start(), &mut rng);
    let second = generate_week_plan(&catalog, &exclusions, start(), &mut rng);

    assert_aggregates_consistent(&first);
    assert_aggregates_consistent(&second);
}

#[test]
fn test_excluded_term_never_appears_in_dinner() {
    let catalog = MealCatalog::builtin();
    let exclusions = ExclusionSet::from_terms(["닭"]);
    assert!(
        !exclusions
            .filter_pool(catalog.entries_for_slot(Slot::Dinner))
            .is_empty()
    );

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_week_plan(&catalog, &exclusions, start(), &mut rng);
        for day in &plan.days {
            for dish in &day.dinner.items {
                assert!(
                    !dish.name.contains('닭'),
                    "seed {} drew excluded dish {}",
                    seed,
                    dish.name
                );
            }
            assert!(day.dinner.items.iter().all(|d| d.name != "닭가슴살 구이 200g"));
        }
    }
}

#[test]
fn test_exclusions_apply_to_every_slot() {
    let catalog = MealCatalog::builtin();
    let exclusions = ExclusionSet::from_terms(["밥", "BANANA", "바나나"]);
    let mut rng = StdRng::seed_from_u64(77);

    let plan = generate_week_plan(&catalog, &exclusions, start(), &mut rng);
    for day in &plan.days {
        for slot in day.slots() {
            assert!(slot.items.iter().all(|d| !exclusions.is_excluded(&d.name)));
        }
    }
}

#[test]
fn test_remove_from_two_item_slot_leaves_remaining_nutrition() {
    let mut rng = StdRng::seed_from_u64(8);
    let plan = generate_week_plan(&MealCatalog::builtin(), &ExclusionSet::new(), start(), &mut rng);
    let kept = plan.days[2].breakfast.items[1].clone();

    let plan = remove_item(plan, 3, Slot::Breakfast, 0);
    let breakfast = &plan.days[2].breakfast;

    assert_eq!(breakfast.items, vec![kept.clone()]);
    assert_eq!(breakfast.totals, kept.nutrition());
    assert_aggregates_consistent(&plan);
}

#[test]
fn test_remove_from_single_item_slot_is_noop() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut plan =
        generate_week_plan(&MealCatalog::builtin(), &ExclusionSet::new(), start(), &mut rng);
    assert!(plan.remove_item(1, Slot::Breakfast, 1).is_removed());

    let before = plan.clone();
    assert_eq!(plan.remove_item(1, Slot::Breakfast, 0), RemoveOutcome::LastItemKept);
    assert_eq!(plan, before);
    assert_eq!(plan.days[0].breakfast.items.len(), 1);
    assert_eq!(plan.days[0].breakfast.totals, before.days[0].breakfast.totals);
}

#[test]
fn test_week_totals_and_average() {
    let mut rng = StdRng::seed_from_u64(31);
    let plan = generate_week_plan(&MealCatalog::builtin(), &ExclusionSet::new(), start(), &mut rng);

    let summed: u32 = plan.days.iter().map(|d| d.totals.calories).sum();
    assert_eq!(plan.total_nutrition().calories, summed);
    assert_float_absolute_eq!(plan.average_daily_calories(), summed as f64 / 7.0, 1e-9);
    assert_eq!(plan.dish_count(), 7 * (2 + 3 + 3));
}
