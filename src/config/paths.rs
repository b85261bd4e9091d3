//! Path management
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-tracker` or `~/.config/budget-tracker`
//! 3. Windows: `%APPDATA%\budget-tracker`

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

/// All paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        Self::resolve(std::env::var(DATA_DIR_ENV).ok())
    }

    /// Resolve from an explicit override value; blank counts as unset
    pub fn resolve(data_dir_override: Option<String>) -> Result<Self, BudgetError> {
        let base_dir = match data_dir_override {
            Some(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// User settings (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Audit log (`<base>/audit.log`)
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Session snapshot (`<base>/data/session.json`)
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-tracker"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-tracker"))
}
