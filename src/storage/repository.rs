//! Generic JSON-backed record repository
//!
//! Each collection (transactions, budgets, goals, ...) lives in its own JSON
//! file as an array of records, held in memory behind an `RwLock`.

use std::fmt;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, BudgetId, Goal, GoalId, Group, GroupId, Habit, HabitId, Holding, HoldingId, Loan,
    LoanId, Transaction, TransactionId,
};

use super::file_io::{read_json, write_json_atomic};

/// A record that can be stored in a [`Repository`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + fmt::Display;

    /// Entity kind, used in audit entries and error messages
    const ENTITY: EntityType;

    fn id(&self) -> Self::Id;

    /// Check whether user input refers to this record
    fn id_matches(&self, input: &str) -> bool;

    /// Human-readable name for listings and the audit log
    fn display_name(&self) -> String;
}

macro_rules! impl_record {
    ($type:ty, $id:ty, $entity:expr, |$rec:ident| $name:expr) => {
        impl Record for $type {
            type Id = $id;
            const ENTITY: EntityType = $entity;

            fn id(&self) -> $id {
                self.id
            }

            fn id_matches(&self, input: &str) -> bool {
                self.id.matches(input)
            }

            fn display_name(&self) -> String {
                let $rec = self;
                $name
            }
        }
    };
}

impl_record!(Transaction, TransactionId, EntityType::Transaction, |t| t.description.clone());
impl_record!(Budget, BudgetId, EntityType::Budget, |b| b.category.clone());
impl_record!(Goal, GoalId, EntityType::Goal, |g| g.name.clone());
impl_record!(Loan, LoanId, EntityType::Loan, |l| l.name.clone());
impl_record!(Group, GroupId, EntityType::Group, |g| g.name.clone());
impl_record!(Holding, HoldingId, EntityType::Investment, |h| h.name.clone());
impl_record!(Habit, HabitId, EntityType::Habit, |h| h.name.clone());

fn lock_error(e: impl fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Repository for one collection of records, kept in insertion order
pub struct Repository<T: Record> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T: Record> Repository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> FinanceResult<()> {
        let records: Vec<T> = read_json(&self.path)?;
        debug!(entity = %T::ENTITY, count = records.len(), path = %self.path.display(), "loaded records");

        let mut data = self.data.write().map_err(lock_error)?;
        *data = records;
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> FinanceResult<()> {
        let data = self.data.read().map_err(lock_error)?;
        write_json_atomic(&self.path, &*data)?;
        debug!(entity = %T::ENTITY, count = data.len(), "saved records");
        Ok(())
    }

    pub fn get(&self, id: T::Id) -> FinanceResult<Option<T>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|r| r.id() == id).cloned())
    }

    pub fn get_all(&self) -> FinanceResult<Vec<T>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.clone())
    }

    /// First record satisfying `predicate`
    pub fn find_by<F>(&self, predicate: F) -> FinanceResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|r| predicate(r)).cloned())
    }

    /// Resolve user input to a record: an ID (or ID prefix), falling back to
    /// an exact, case-insensitive name match
    pub fn resolve(&self, input: &str) -> FinanceResult<T> {
        let data = self.data.read().map_err(lock_error)?;

        let by_id: Vec<&T> = data.iter().filter(|r| r.id_matches(input)).collect();
        match by_id.len() {
            1 => return Ok(by_id[0].clone()),
            0 => {}
            n => {
                return Err(FinanceError::Validation(format!(
                    "'{}' matches {} {} records; use a longer ID",
                    input,
                    n,
                    T::ENTITY
                )))
            }
        }

        let wanted = input.trim().to_lowercase();
        data.iter()
            .find(|r| r.display_name().to_lowercase() == wanted)
            .cloned()
            .ok_or_else(|| FinanceError::not_found(T::ENTITY.label(), input))
    }

    /// Add a new record
    pub fn insert(&self, record: T) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        if data.iter().any(|r| r.id() == record.id()) {
            return Err(FinanceError::Duplicate {
                entity_type: T::ENTITY.label(),
                identifier: record.id().to_string(),
            });
        }
        data.push(record);
        Ok(())
    }

    /// Replace an existing record, returning the previous version
    pub fn update(&self, record: T) -> FinanceResult<T> {
        let mut data = self.data.write().map_err(lock_error)?;
        let slot = data
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| FinanceError::not_found(T::ENTITY.label(), record.id().to_string()))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove a record, returning it
    pub fn remove(&self, id: T::Id) -> FinanceResult<T> {
        let mut data = self.data.write().map_err(lock_error)?;
        let pos = data
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| FinanceError::not_found(T::ENTITY.label(), id.to_string()))?;
        Ok(data.remove(pos))
    }

    pub fn count(&self) -> FinanceResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
