//! Habit service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FinanceResult;
use crate::models::Habit;
use crate::storage::Storage;

pub struct HabitService<'a> {
    storage: &'a Storage,
}

impl<'a> HabitService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, name: &str) -> FinanceResult<Habit> {
        let habit = Habit::new(name)?;

        self.storage.habits.insert(habit.clone())?;
        self.storage.habits.save()?;

        self.storage.log_create(
            EntityType::Habit,
            habit.id.to_string(),
            Some(habit.name.clone()),
            &habit,
        )?;

        Ok(habit)
    }

    pub fn list(&self) -> FinanceResult<Vec<Habit>> {
        self.storage.habits.get_all()
    }

    /// Mark a habit done on `date`. Returns the habit and whether the day
    /// was newly recorded; repeating a day changes nothing.
    pub fn complete(&self, id: &str, date: NaiveDate) -> FinanceResult<(Habit, bool)> {
        let mut habit = self.storage.habits.resolve(id)?;
        let before = habit.clone();

        if !habit.complete_on(date) {
            return Ok((habit, false));
        }

        self.storage.habits.update(habit.clone())?;
        self.storage.habits.save()?;

        self.storage.log_update(
            EntityType::Habit,
            habit.id.to_string(),
            Some(habit.name.clone()),
            &before,
            &habit,
        )?;

        Ok((habit, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinanceHubPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn test_complete_builds_streak() {
        let (_temp, storage) = create_test_storage();
        let service = HabitService::new(&storage);
        service.create("No eating out").unwrap();

        for d in 1..=3 {
            let (_, new) = service.complete("no eating out", day(d)).unwrap();
            assert!(new);
        }
        let (habit, new) = service.complete("No eating out", day(3)).unwrap();
        assert!(!new);
        assert_eq!(habit.current_streak(day(3)), 3);

        // Create plus three updates; the repeat is not audited
        assert_eq!(storage.audit().read_all().unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_habit() {
        let (_temp, storage) = create_test_storage();
        let service = HabitService::new(&storage);
        assert!(service.complete("ghost", day(1)).unwrap_err().is_not_found());
    }
}
