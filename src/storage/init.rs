//! Storage initialization
//!
//! Handles first-run setup: directories plus an empty file per collection.

use std::path::PathBuf;

use tracing::info;

use crate::config::paths::FinanceHubPaths;
use crate::error::FinanceError;
use crate::models::SalaryPlan;

use super::file_io::write_json_atomic;

fn collection_files(paths: &FinanceHubPaths) -> [PathBuf; 7] {
    [
        paths.transactions_file(),
        paths.budgets_file(),
        paths.goals_file(),
        paths.loans_file(),
        paths.groups_file(),
        paths.portfolio_file(),
        paths.habits_file(),
    ]
}

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched. Returns how many files were created.
pub fn initialize_storage(paths: &FinanceHubPaths) -> Result<usize, FinanceError> {
    paths.ensure_directories()?;

    let mut created = 0;
    for file in collection_files(paths) {
        if !file.exists() {
            write_json_atomic(&file, &Vec::<serde_json::Value>::new())?;
            created += 1;
        }
    }

    if !paths.salary_file().exists() {
        write_json_atomic(paths.salary_file(), &None::<SalaryPlan>)?;
        created += 1;
    }

    info!(base = %paths.base_dir().display(), created, "storage initialized");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(initialize_storage(&paths).unwrap(), 8);
        assert_eq!(
            std::fs::read_to_string(paths.goals_file()).unwrap().trim(),
            "[]"
        );
        assert_eq!(
            std::fs::read_to_string(paths.salary_file()).unwrap().trim(),
            "null"
        );
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.habits_file(), "[{\"custom\": true}]").unwrap();

        assert_eq!(initialize_storage(&paths).unwrap(), 7);
        assert!(std::fs::read_to_string(paths.habits_file())
            .unwrap()
            .contains("custom"));
        assert_eq!(initialize_storage(&paths).unwrap(), 0);
    }
}
