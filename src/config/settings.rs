//! User settings
//!
//! Display preferences, diagnostic log level and whether changes are written
//! to the audit log. Every field has a default so older or hand-edited
//! config files keep loading.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default tracing filter when `BUDGET_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether committed changes are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject a `date_format` that chrono cannot render for a plain date
    pub fn validate(&self) -> Result<(), BudgetError> {
        if !is_date_format_usable(&self.date_format) {
            return Err(BudgetError::Config(format!(
                "Invalid date_format '{}': not a strftime pattern for dates",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Whether `format` renders a date without error
///
/// Unknown specifiers and time-of-day fields (e.g. `%H`) both fail here.
pub fn is_date_format_usable(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 1) else {
        return false;
    };
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).is_ok()
}
