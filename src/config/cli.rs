use crate::config::Overrides;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-library")]
#[command(about = "Interactive in-memory library: books, patrons, loans and late fines")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pin today's date (YYYY-MM-DD) instead of using the system clock
    #[arg(long)]
    pub today: Option<String>,

    /// Currency symbol printed before fines
    #[arg(long)]
    pub currency: Option<String>,

    /// Listing format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            currency_symbol: self.currency.clone(),
            format: self.format.clone(),
            log_level: self.log_level.clone(),
            today: self.today.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "small-library",
            "--today",
            "2024-01-01",
            "--format",
            "json",
            "-v",
        ]);

        assert!(config.verbose);
        assert!(config.config.is_none());
        let overrides = config.overrides();
        assert_eq!(overrides.today.as_deref(), Some("2024-01-01"));
        assert_eq!(overrides.format.as_deref(), Some("json"));
        assert!(overrides.currency_symbol.is_none());
    }
}
