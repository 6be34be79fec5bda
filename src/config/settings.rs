//! Application settings configuration
//!
//! Defaults for the store password and for what `compare` shows. Command
//! line flags take precedence over anything loaded here.

use crate::models::TableSelector;
use crate::output::{ExtraField, OutputFormat};
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Store access settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_password() -> String {
    "changeit".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            password: default_password(),
        }
    }
}

/// Defaults for the compare command
#[derive(Debug, Clone, Deserialize)]
pub struct CompareSettings {
    #[serde(default = "default_tables")]
    pub tables: Vec<TableSelector>,
    #[serde(default = "default_extra")]
    pub extra: Vec<ExtraField>,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_tables() -> Vec<TableSelector> {
    vec![
        TableSelector::Removed,
        TableSelector::Added,
        TableSelector::Changed,
    ]
}

fn default_extra() -> Vec<ExtraField> {
    vec![ExtraField::NotBefore]
}

fn default_format() -> OutputFormat {
    OutputFormat::Console
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            tables: default_tables(),
            extra: default_extra(),
            format: default_format(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub compare: CompareSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compare.tables.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "compare.tables".to_string(),
                message: "at least one table must be selected".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.store.password, "changeit");
        assert_eq!(settings.compare.tables, default_tables());
        assert_eq!(settings.compare.extra, vec![ExtraField::NotBefore]);
        assert_eq!(settings.compare.format, OutputFormat::Console);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [compare]
            tables = ["all"]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.compare.tables, vec![TableSelector::All]);
        assert_eq!(settings.compare.format, OutputFormat::Json);
        assert_eq!(settings.compare.extra, vec![ExtraField::NotBefore]);
        assert_eq!(settings.store.password, "changeit");
    }

    #[test]
    fn test_empty_tables_rejected() {
        let err = Settings::from_toml("[compare]\ntables = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_table_rejected() {
        let err = Settings::from_toml("[compare]\ntables = [\"modified\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_file("/nonexistent/keystore-toolkit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
