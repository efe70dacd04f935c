//! Salary plan storage
//!
//! There is at most one plan, stored in salary.json (`null` when unset).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FinanceError, FinanceResult};
use crate::models::SalaryPlan;

use super::file_io::{read_json, write_json_atomic};

pub struct SalaryRepository {
    path: PathBuf,
    data: RwLock<Option<SalaryPlan>>,
}

impl SalaryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    pub fn load(&self) -> FinanceResult<()> {
        let plan: Option<SalaryPlan> = read_json(&self.path)?;
        if let Some(plan) = &plan {
            plan.validate()?;
        }

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = plan;
        Ok(())
    }

    pub fn save(&self) -> FinanceResult<()> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        write_json_atomic(&self.path, &*data)
    }

    pub fn get(&self) -> FinanceResult<Option<SalaryPlan>> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Replace the plan, returning the previous one
    pub fn set(&self, plan: SalaryPlan) -> FinanceResult<Option<SalaryPlan>> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.replace(plan))
    }
}
