//! Salary plan service

use crate::audit::EntityType;
use crate::calc::salary::{allocate, SalaryAllocation};
use crate::error::FinanceResult;
use crate::models::{Money, SalaryPlan};
use crate::storage::Storage;

/// Audit ID of the single salary plan
const SALARY_ENTITY_ID: &str = "salary";

pub struct SalaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SalaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or replace) the salary plan
    pub fn set(
        &self,
        amount: Money,
        needs_percent: f64,
        wants_percent: f64,
        savings_percent: f64,
    ) -> FinanceResult<SalaryPlan> {
        let plan = SalaryPlan::new(amount, needs_percent, wants_percent, savings_percent)?;

        let previous = self.storage.salary.set(plan.clone())?;
        self.storage.salary.save()?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Salary,
                SALARY_ENTITY_ID.to_string(),
                None,
                &before,
                &plan,
            )?,
            None => self.storage.log_create(
                EntityType::Salary,
                SALARY_ENTITY_ID.to_string(),
                None,
                &plan,
            )?,
        }

        Ok(plan)
    }

    /// The current plan and its allocation, if a plan is set
    pub fn show(&self) -> FinanceResult<Option<(SalaryPlan, SalaryAllocation)>> {
        Ok(self.storage.salary.get()?.map(|plan| {
            let allocation = allocate(&plan);
            (plan, allocation)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::FinanceHubPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_and_show() {
        let (_temp, storage) = create_test_storage();
        let service = SalaryService::new(&storage);
        assert!(service.show().unwrap().is_none());

        service.set(Money::from_major(60_000), 50.0, 30.0, 20.0).unwrap();
        service.set(Money::from_major(70_000), 50.0, 30.0, 20.0).unwrap();

        let (plan, allocation) = service.show().unwrap().unwrap();
        assert_eq!(plan.amount, Money::from_major(70_000));
        assert_eq!(allocation.needs, Money::from_major(35_000));
        assert_eq!(allocation.total(), plan.amount);

        let ops: Vec<_> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update]);
    }

    #[test]
    fn test_rejects_split_not_summing_to_100() {
        let (_temp, storage) = create_test_storage();
        let service = SalaryService::new(&storage);
        assert!(service
            .set(Money::from_major(1_000), 50.0, 30.0, 30.0)
            .unwrap_err()
            .is_validation());
        assert!(service.show().unwrap().is_none());
    }
}
