//! Habit model
//!
//! A named daily habit (e.g. "No eating out") with the days it was done.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::HabitId;
use super::require_label;
use crate::error::FinanceResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,

    /// Days the habit was completed, sorted ascending and unique
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> FinanceResult<Self> {
        Ok(Self {
            id: HabitId::new(),
            name: require_label(name, "Habit name")?,
            completed_dates: Vec::new(),
        })
    }

    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.binary_search(&date).is_ok()
    }

    /// Mark the habit done for `date`. Returns false if it already was.
    pub fn complete_on(&mut self, date: NaiveDate) -> bool {
        match self.completed_dates.binary_search(&date) {
            Ok(_) => false,
            Err(pos) => {
                self.completed_dates.insert(pos, date);
                true
            }
        }
    }

    /// Consecutive completed days ending at `today`, or ending yesterday
    /// while today is still open
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let mut day = if self.is_done_on(today) {
            today
        } else {
            today - Duration::days(1)
        };

        let mut streak = 0;
        while self.is_done_on(day) {
            streak += 1;
            day -= Duration::days(1);
        }
        streak
    }
}
