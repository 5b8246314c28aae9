//! User settings for the finance tracker
//!
//! Stored as pretty JSON in `config.json`. Every field has a serde default,
//! so older or hand-edited files keep loading.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// Settings schema version this build reads and writes
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// How many transactions `transaction list` shows by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_recent_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Defaults are not written; call [`save`](Self::save) to persist them.
    /// A file that parses but fails [`validate`](Self::validate) is a
    /// config error.
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot: the schema version and the date format
    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.schema_version > SETTINGS_SCHEMA_VERSION {
            return Err(FinanceError::Config(format!(
                "Settings schema version {} is newer than supported version {}",
                self.schema_version, SETTINGS_SCHEMA_VERSION
            )));
        }

        let invalid_date_format = || {
            FinanceError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            ))
        };

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid_date_format());
        }

        // Time fields like %H parse as items but cannot format a date
        let mut sample = String::new();
        write!(sample, "{}", Local::now().date_naive().format(&self.date_format))
            .map_err(|_| invalid_date_format())?;

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
