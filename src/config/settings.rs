//! User settings for pocketledger
//!
//! Display preferences, the notification journal switch, and an optional
//! roster file location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::LedgerPaths;
use crate::error::FinanceError;

/// User settings for pocketledger
#[derive(Debug, Clone, Serialize, Deserialize)]
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

    /// Whether notifications are appended to the journal file
    #[serde(default = "default_journal_enabled")]
    pub journal_enabled: bool,

    /// Roster file to load users from, if not the default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_journal_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            journal_enabled: default_journal_enabled(),
            roster_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, FinanceError> {
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
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Load settings, writing the defaults to disk on first run
    pub fn load_or_init(paths: &LedgerPaths) -> Result<Self, FinanceError> {
        let settings = Self::load_or_create(paths)?;
        if !paths.settings_file().exists() {
            settings.save(paths)?;
            tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
        }
        Ok(settings)
    }

    /// The roster file to load, if any
    ///
    /// An explicitly configured file is returned even if missing, so the
    /// caller reports it; the default location is only used when present.
    pub fn roster_path(&self, paths: &LedgerPaths) -> Option<PathBuf> {
        if let Some(configured) = &self.roster_file {
            return Some(configured.clone());
        }
        let default = paths.roster_file();
        default.exists().then_some(default)
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
        assert!(settings.journal_enabled);
        assert!(settings.roster_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.journal_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(!loaded.journal_enabled);
    }

    #[test]
    fn test_load_or_init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("fresh"));

        let settings = Settings::load_or_init(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "₹");
        assert!(paths.settings_file().exists());

        let mut edited = settings.clone();
        edited.date_format = "%d/%m/%Y".into();
        edited.save(&paths).unwrap();

        let reloaded = Settings::load_or_init(&paths).unwrap();
        assert_eq!(reloaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.schema_version, 1);
        assert!(settings.journal_enabled);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(FinanceError::Config(_))
        ));
    }

    #[test]
    fn test_roster_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert!(settings.roster_path(&paths).is_none());

        std::fs::write(paths.roster_file(), "{}").unwrap();
        assert_eq!(settings.roster_path(&paths), Some(paths.roster_file()));

        settings.roster_file = Some(temp_dir.path().join("team.yaml"));
        assert_eq!(
            settings.roster_path(&paths),
            Some(temp_dir.path().join("team.yaml"))
        );
    }
}
