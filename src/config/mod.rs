#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::AppResult;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, FORMATS, LOG_LEVELS};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// How the console presents outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub format: OutputFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// Values given on the command line; each one beats the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub currency_symbol: Option<String>,
    pub format: Option<String>,
    pub log_level: Option<String>,
    pub today: Option<String>,
}

impl Validate for Overrides {
    fn validate(&self) -> AppResult<()> {
        if let Some(symbol) = &self.currency_symbol {
            validation::validate_non_empty_string("--currency", symbol)?;
        }
        if let Some(format) = &self.format {
            validation::validate_one_of("--format", format, &FORMATS)?;
        }
        if let Some(level) = &self.log_level {
            validation::validate_one_of("--log-level", level, &LOG_LEVELS)?;
        }
        if let Some(today) = &self.today {
            validation::validate_date("--today", today)?;
        }
        Ok(())
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub display: DisplaySettings,
    pub log_level: String,
    /// `None` means use the system clock.
    pub today: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            today: None,
        }
    }
}

impl Settings {
    /// Merges the file and command-line values, validating both.
    pub fn resolve(file: &TomlConfig, overrides: &Overrides) -> AppResult<Self> {
        file.validate()?;
        overrides.validate()?;

        let currency_symbol = overrides
            .currency_symbol
            .clone()
            .or_else(|| file.display.currency_symbol.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        let format = overrides
            .format
            .as_deref()
            .or(file.display.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();
        let log_level = overrides
            .log_level
            .clone()
            .or_else(|| file.logging.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let today = match overrides.today.as_deref().or(file.clock.today.as_deref()) {
            Some(raw) => Some(validation::validate_date("today", raw)?),
            None => None,
        };

        Ok(Self {
            display: DisplaySettings {
                currency_symbol,
                format,
            },
            log_level,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(&TomlConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[display]\ncurrency_symbol = \"€\"\nformat = \"json\"\n[clock]\ntoday = \"2024-01-01\"\n",
        )
        .unwrap();
        let overrides = Overrides {
            currency_symbol: Some("CLP ".to_string()),
            today: Some("2024-02-01".to_string()),
            ..Overrides::default()
        };

        let settings = Settings::resolve(&file, &overrides).unwrap();
        assert_eq!(settings.display.currency_symbol, "CLP ");
        assert_eq!(settings.display.format, OutputFormat::Json);
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_pinned_date_without_due_date_is_rejected() {
        let overrides = Overrides {
            today: Some("+262142-12-30".to_string()),
            ..Overrides::default()
        };
        let err = Settings::resolve(&TomlConfig::default(), &overrides).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfigValueError { field, .. } if field == "--today"));

        let file = TomlConfig::from_toml_str("[clock]\ntoday = \"+262142-12-30\"\n").unwrap();
        assert!(Settings::resolve(&file, &Overrides::default()).is_err());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let overrides = Overrides {
            format: Some("xml".to_string()),
            ..Overrides::default()
        };
        assert!(Settings::resolve(&TomlConfig::default(), &overrides).is_err());
    }
}
