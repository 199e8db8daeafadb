use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use week_menu_rs::catalog::MealCatalog;
use week_menu_rs::error::PlannerError;
use week_menu_rs::models::{Slot, WeekPlan};
use week_menu_rs::planner::{ExclusionSet, generate_week_plan};
use week_menu_rs::state::{
    FileStore, FlowState, KeyValueStore, MealPlanManager, MemoryStore, PlanHistory,
    SAVED_PLANS_KEY,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn plan(seed: u64) -> WeekPlan {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_week_plan(&MealCatalog::builtin(), &ExclusionSet::new(), start(), &mut rng)
}

fn at(minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 19, 8, minute, 0).unwrap()
}

#[test]
fn test_sixth_save_evicts_oldest() {
    let mut kv = MemoryStore::new();
    let mut history = PlanHistory::new();

    let saved: Vec<_> = (0..6)
        .map(|i| {
            history
                .save_at(&mut kv, plan(i), at(i as u32))
                .unwrap()
        })
        .collect();

    assert_eq!(history.len(), 5);
    let ids: Vec<u64> = history.list().iter().map(|e| e.id).collect();
    let expected: Vec<u64> = saved.iter().rev().take(5).map(|e| e.id).collect();
    assert_eq!(ids, expected, "history must be the 5 newest, newest first");
    assert!(history.get(saved[0].id).is_none(), "first plan should be evicted");
    assert_eq!(history.list()[0].plan.days, plan(5).days);

    // Persisted copy matches and is capped too
    let raw = kv.get(SAVED_PLANS_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().map(|a| a.len()), Some(5));
    assert!(stored[0]["meals"]["days"].is_array());
    assert!(stored[0]["date"].is_string());
}

#[test]
fn test_delete_preserves_order_of_others() {
    let mut kv = MemoryStore::new();
    let mut history = PlanHistory::new();
    for i in 0..4 {
        history.save_at(&mut kv, plan(i), at(i as u32)).unwrap();
    }
    let ids: Vec<u64> = history.list().iter().map(|e| e.id).collect();

    assert!(history.delete(&mut kv, ids[1]).unwrap());
    let remaining: Vec<u64> = history.list().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);

    let before = history.list().to_vec();
    assert!(!history.delete(&mut kv, 999).unwrap());
    assert_eq!(history.list(), before.as_slice());

    let reloaded = PlanHistory::load(&kv).unwrap();
    assert_eq!(reloaded.list(), before.as_slice());
}

#[test]
fn test_manager_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let saved_id = {
        let mut manager =
            MealPlanManager::open(FileStore::new(dir.path()), MealCatalog::builtin()).unwrap();
        manager.add_exclusion("닭").unwrap();
        manager.add_exclusion("Salmon").unwrap();
        manager.generate_week_plan(start(), &mut rng).unwrap();
        manager.save_active().unwrap().id
    };

    let manager =
        MealPlanManager::open(FileStore::new(dir.path()), MealCatalog::builtin()).unwrap();
    assert_eq!(manager.exclusions().list(), ["닭", "salmon"]);
    assert_eq!(manager.saved_plans().len(), 1);
    assert_eq!(manager.saved_plans()[0].id, saved_id);
    assert_eq!(manager.flow_state(), FlowState::Idle);
    assert!(manager.active_plan().is_none());

    let saved = manager.saved_plan(saved_id).unwrap();
    for day in &saved.plan.days {
        assert!(day.dinner.items.iter().all(|d| !d.name.contains('닭')));
    }
}

#[test]
fn test_manager_flow() {
    let mut manager = MealPlanManager::open(MemoryStore::new(), MealCatalog::builtin()).unwrap();
    let mut rng = StdRng::seed_from_u64(10);

    assert!(matches!(
        manager.remove_item(1, Slot::Lunch, 0),
        Err(PlannerError::NoActivePlan)
    ));

    manager.generate_week_plan(start(), &mut rng).unwrap();
    let first = manager.active_plan().unwrap().clone();

    assert!(manager.remove_item(1, Slot::Lunch, 0).unwrap().is_removed());
    assert_eq!(manager.active_plan().unwrap().days[0].lunch.len(), 2);

    // Regenerating replaces the plan wholesale
    manager.generate_week_plan(start(), &mut rng).unwrap();
    let second = manager.active_plan().unwrap();
    assert_eq!(second.days[0].lunch.len(), 3);
    assert_ne!(second, &first);

    manager.start_over();
    assert_eq!(manager.flow_state(), FlowState::Idle);
    assert!(manager.save_active().is_err());
}
