//! Path management for the finance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/finance-tracker` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "FINANCE_TRACKER_CONFIG_DIR";

/// Manages all paths used by the finance tracker
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for configuration and logs
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Create a new FinancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be found
    /// and the override variable is not set.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "finance-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinanceError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file written while the terminal form runs
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("finance-tracker.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("finance-tracker.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = FinancePaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
