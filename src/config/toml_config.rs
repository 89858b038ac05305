use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Pins "today" to an ISO date instead of the system clock.
    pub today: Option<String>,
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const FORMATS: [&str; 2] = ["text", "json"];

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` references with the environment value.
    fn substitute_env_vars(content: &str) -> AppResult<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(AppError::MissingEnvVar { name: missing });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });
        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> AppResult<()> {
        if let Some(symbol) = &self.display.currency_symbol {
            validation::validate_non_empty_string("display.currency_symbol", symbol)?;
        }
        if let Some(format) = &self.display.format {
            validation::validate_one_of("display.format", format, &FORMATS)?;
        }
        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(today) = &self.clock.today {
            validation::validate_date("clock.today", today)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[display]
currency_symbol = "€"
format = "json"

[logging]
level = "debug"

[clock]
today = "2024-01-01"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.display.currency_symbol.as_deref(), Some("€"));
        assert_eq!(config.display.format.as_deref(), Some("json"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_LIBRARY_TEST_CURRENCY", "CLP");

        let toml_content = r#"
[display]
currency_symbol = "${SMALL_LIBRARY_TEST_CURRENCY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.currency_symbol.as_deref(), Some("CLP"));

        std::env::remove_var("SMALL_LIBRARY_TEST_CURRENCY");
    }

    #[test]
    fn test_missing_env_var_is_reported() {
        let toml_content = r#"
[display]
currency_symbol = "${SMALL_LIBRARY_DEFINITELY_UNSET}"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, AppError::MissingEnvVar { name } if name == "SMALL_LIBRARY_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[clock]\ntoday = \"tomorrow\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ncurrency_symbol = \"$\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.display.currency_symbol.as_deref(), Some("$"));
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound { .. }));
    }
}
