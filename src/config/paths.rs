//! Path management for FinanceHub
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCEHUB_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `financehub` as reported by
//!    `directories::ProjectDirs` (`~/.config/financehub` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANCEHUB_DATA_DIR";

/// Manages all paths used by FinanceHub
#[derive(Debug, Clone)]
pub struct FinanceHubPaths {
    base_dir: PathBuf,
}

impl FinanceHubPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    pub fn loans_file(&self) -> PathBuf {
        self.data_dir().join("loans.json")
    }

    pub fn groups_file(&self) -> PathBuf {
        self.data_dir().join("groups.json")
    }

    /// Get the path to portfolio.json (investment holdings)
    pub fn portfolio_file(&self) -> PathBuf {
        self.data_dir().join("portfolio.json")
    }

    pub fn habits_file(&self) -> PathBuf {
        self.data_dir().join("habits.json")
    }

    pub fn salary_file(&self) -> PathBuf {
        self.data_dir().join("salary.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FinanceHub has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    ProjectDirs::from("", "", "financehub")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinanceError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = FinanceHubPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data");

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.portfolio_file(), data.join("portfolio.json"));
        assert_eq!(paths.salary_file(), data.join("salary.json"));
    }
}
