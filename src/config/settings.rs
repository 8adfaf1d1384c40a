//! User settings for spendlog
//!
//! Manages display preferences, the default export file and the log level.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::LedgerError;

/// User settings for spendlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where `save` writes when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,

    /// Width in characters of the bars in the category chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_file() -> PathBuf {
    PathBuf::from("expenses.csv")
}

fn default_chart_width() -> usize {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            export_file: default_export_file(),
            chart_width: default_chart_width(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
