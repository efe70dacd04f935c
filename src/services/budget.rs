//! Budget service
//!
//! One monthly budget per category, and utilisation against a month's
//! spending.

use crate::audit::EntityType;
use crate::calc::budget::{evaluate, BudgetUtilization};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Money, YearMonth};
use crate::storage::Storage;

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn find_by_category(&self, category: &str) -> FinanceResult<Option<Budget>> {
        let category = category.trim();
        self.storage.budgets.find_by(|b| b.category == category)
    }

    /// Create a budget; a category can only have one
    pub fn create(&self, category: &str, amount: Money) -> FinanceResult<Budget> {
        let budget = Budget::new(category, amount)?;

        if self.find_by_category(&budget.category)?.is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Budget",
                identifier: budget.category,
            });
        }

        self.storage.budgets.insert(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.log_create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.category.clone()),
            &budget,
        )?;

        Ok(budget)
    }

    /// Create the category's budget or change its amount.
    /// Returns the budget and whether it was newly created.
    pub fn set(&self, category: &str, amount: Money) -> FinanceResult<(Budget, bool)> {
        let Some(mut budget) = self.find_by_category(category)? else {
            return self.create(category, amount).map(|b| (b, true));
        };

        let before = budget.clone();
        budget.set_amount(amount)?;

        self.storage.budgets.update(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.log_update(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.category.clone()),
            &before,
            &budget,
        )?;

        Ok((budget, false))
    }

    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    pub fn delete(&self, category: &str) -> FinanceResult<Budget> {
        let budget = self
            .find_by_category(category)?
            .ok_or_else(|| FinanceError::budget_not_found(category.trim()))?;

        self.storage.budgets.remove(budget.id)?;
        self.storage.budgets.save()?;

        self.storage.log_delete(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.category.clone()),
            &budget,
        )?;

        Ok(budget)
    }

    /// Utilisation of every budget against the month's expenses
    pub fn status(&self, month: YearMonth) -> FinanceResult<Vec<BudgetUtilization>> {
        let transactions: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.in_month(month))
            .collect();
        let budgets = self.storage.budgets.get_all()?;

        evaluate(&transactions, &budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::BudgetStatus;
    use crate::config::paths::FinanceHubPaths;
    use crate::models::TransactionKind;
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_duplicate_category() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.create("Food", Money::from_major(5_000)).unwrap();
        let err = service.create(" Food ", Money::from_major(1)).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate { .. }));

        // Matching is exact
        service.create("food", Money::from_major(1)).unwrap();
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_set_creates_then_updates() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let (first, created) = service.set("Rent", Money::from_major(15_000)).unwrap();
        assert!(created);
        let (second, created) = service.set("Rent", Money::from_major(16_000)).unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);
        assert_eq!(service.list().unwrap()[0].amount, Money::from_major(16_000));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .starts_with("amount: 1500000 -> 1600000"));
    }

    #[test]
    fn test_delete_unknown_category() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service.delete("Travel").unwrap_err().is_not_found());
    }

    #[test]
    fn test_status_counts_only_the_month() {
        let (_temp, storage) = create_test_storage();
        let budgets = BudgetService::new(&storage);
        let txns = TransactionService::new(&storage);

        budgets.create("Food", Money::from_major(1_000)).unwrap();
        for (m, amount) in [(4, 850), (3, 5_000)] {
            txns.create(
                TransactionKind::Expense,
                Money::from_major(amount),
                "Food",
                NaiveDate::from_ymd_opt(2025, m, 2).unwrap(),
                "Groceries",
                None,
            )
            .unwrap();
        }

        let status = budgets.status(YearMonth::new(2025, 4).unwrap()).unwrap();
        assert_eq!(status.len(), 1);
        assert_eq!(status[0].spent, Money::from_major(850));
        assert_eq!(status[0].status, BudgetStatus::Warning);
    }
}
