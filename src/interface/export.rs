use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::WeekPlan;

const HEADER: [&str; 8] = [
    "day",
    "date",
    "slot",
    "dish",
    "calories",
    "carbs_g",
    "protein_g",
    "fat_g",
];

/// Write a plan as CSV, one row per dish.
pub fn write_plan_csv<W: Write>(plan: &WeekPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for day in &plan.days {
        for slot in day.slots() {
            for dish in &slot.items {
                wtr.write_record([
                    day.day_index.to_string(),
                    day.date_label.clone(),
                    slot.slot.to_string(),
                    dish.name.clone(),
                    dish.calories.to_string(),
                    dish.carbs_grams.to_string(),
                    dish.protein_grams.to_string(),
                    dish.fat_grams.to_string(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write a plan to a CSV file at `path`.
pub fn export_plan_csv(plan: &WeekPlan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, DaySlot, DishEntry, Slot};
    use chrono::Utc;

    #[test]
    fn test_one_row_per_dish() {
        let day = DayPlan::new(
            1,
            "10월 19일 (월)".to_string(),
            DaySlot::new(
                Slot::Breakfast,
                vec![DishEntry::new("오트밀 40g", Slot::Breakfast, 150, 27, 5, 3)],
            ),
            DaySlot::new(
                Slot::Lunch,
                vec![DishEntry::new("된장찌개", Slot::Lunch, 180, 12, 13, 8)],
            ),
            DaySlot::new(
                Slot::Dinner,
                vec![
                    DishEntry::new("계란찜", Slot::Dinner, 140, 3, 11, 9),
                    DishEntry::new("양배추 샐러드", Slot::Dinner, 70, 12, 2, 2),
                ],
            ),
        );
        let plan = WeekPlan {
            generated_at: Utc::now(),
            days: vec![day],
        };

        let mut out = Vec::new();
        write_plan_csv(&plan, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "day,date,slot,dish,calories,carbs_g,protein_g,fat_g");
        assert_eq!(lines[1], "1,10월 19일 (월),breakfast,오트밀 40g,150,27,5,3");
        assert_eq!(lines[4], "1,10월 19일 (월),dinner,양배추 샐러드,70,12,2,2");
    }
}
