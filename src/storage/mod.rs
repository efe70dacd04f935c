//! Storage layer for FinanceHub
//!
//! JSON file storage with atomic writes. One file per collection under
//! `data/`, loaded into memory by [`Storage::load_all`]; every mutation is
//! written back immediately and recorded in the audit log.

pub mod file_io;
pub mod init;
pub mod repository;
pub mod salary;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use repository::{Record, Repository};
pub use salary::SalaryRepository;

use serde::Serialize;
use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FinanceHubPaths;
use crate::error::FinanceError;
use crate::models::{
    Budget, FinanceSnapshot, Goal, Group, Habit, Holding, Loan, Transaction,
};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinanceHubPaths,
    audit: AuditLogger,
    pub transactions: Repository<Transaction>,
    pub budgets: Repository<Budget>,
    pub goals: Repository<Goal>,
    pub loans: Repository<Loan>,
    pub groups: Repository<Group>,
    pub holdings: Repository<Holding>,
    pub habits: Repository<Habit>,
    pub salary: SalaryRepository,
}

impl Storage {
    /// Create a new Storage instance; nothing is read until `load_all`
    pub fn new(paths: FinanceHubPaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            transactions: Repository::new(paths.transactions_file()),
            budgets: Repository::new(paths.budgets_file()),
            goals: Repository::new(paths.goals_file()),
            loans: Repository::new(paths.loans_file()),
            groups: Repository::new(paths.groups_file()),
            holdings: Repository::new(paths.portfolio_file()),
            habits: Repository::new(paths.habits_file()),
            salary: SalaryRepository::new(paths.salary_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinanceHubPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        self.loans.load()?;
        self.groups.load()?;
        self.holdings.load()?;
        self.habits.load()?;
        self.salary.load()?;
        debug!(base = %self.paths.base_dir().display(), "all collections loaded");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        self.loans.save()?;
        self.groups.save()?;
        self.holdings.save()?;
        self.habits.save()?;
        self.salary.save()?;
        Ok(())
    }

    /// Copy of everything in memory, for the calculation and report layers
    pub fn snapshot(&self) -> Result<FinanceSnapshot, FinanceError> {
        Ok(FinanceSnapshot {
            transactions: self.transactions.get_all()?,
            budgets: self.budgets.get_all()?,
            goals: self.goals.get_all()?,
            loans: self.loans.get_all()?,
            groups: self.groups.get_all()?,
            holdings: self.holdings.get_all()?,
            habits: self.habits.get_all()?,
            salary: self.salary.get()?,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        info!(entity = %entity_type, id = %entity_id, "created");
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), FinanceError> {
        info!(entity = %entity_type, id = %entity_id, "updated");
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        info!(entity = %entity_type, id = %entity_id, "deleted");
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_saved_data() {
        let (temp_dir, storage) = create_storage();
        let budget = Budget::new("Food", Money::from_major(5_000)).unwrap();
        storage.budgets.insert(budget).unwrap();
        storage.save_all().unwrap();

        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();

        let snapshot = reopened.snapshot().unwrap();
        assert_eq!(snapshot.budgets.len(), 1);
        assert_eq!(snapshot.budgets[0].category, "Food");
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp, storage) = create_storage();
        let goal = Goal::new("Car", Money::from_major(100), Money::zero(), 6, 8.0).unwrap();

        storage
            .log_create(EntityType::Goal, goal.id.to_string(), Some(goal.name.clone()), &goal)
            .unwrap();
        storage
            .log_delete(EntityType::Goal, goal.id.to_string(), None, &goal)
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
    }
}
