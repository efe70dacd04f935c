//! Habit display formatting

use chrono::NaiveDate;
use tabled::Tabled;

use super::report::table;
use crate::models::Habit;

#[derive(Tabled)]
struct HabitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Habit")]
    name: String,
    #[tabled(rename = "Today")]
    today: &'static str,
    #[tabled(rename = "Streak")]
    streak: String,
    #[tabled(rename = "Days Done")]
    total: usize,
}

pub fn format_habit_list(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return "No habits tracked.".to_string();
    }

    table(habits.iter().map(|habit| {
        let streak = habit.current_streak(today);
        HabitRow {
            id: habit.id.to_string(),
            name: habit.name.clone(),
            today: if habit.is_done_on(today) { "✓" } else { "" },
            streak: format!("{} day{}", streak, if streak == 1 { "" } else { "s" }),
            total: habit.completed_dates.len(),
        }
    }))
}
