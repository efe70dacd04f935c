//! User settings for FinanceHub
//!
//! Display preferences and defaults for the planning commands.

use serde::{Deserialize, Serialize};

use super::paths::FinanceHubPaths;
use crate::error::FinanceError;

/// User settings for FinanceHub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Expected annual return used by `goal add` and `calc goal` when no
    /// rate is given
    #[serde(default = "default_goal_rate")]
    pub default_goal_rate_percent: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    crate::models::money::DEFAULT_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_goal_rate() -> f64 {
    12.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_goal_rate_percent: default_goal_rate(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinanceHubPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanceHubPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_goal_rate_percent, 12.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.default_goal_rate_percent = 8.5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_goal_rate_percent, 8.5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_goal_rate_percent, 12.0);
    }
}
