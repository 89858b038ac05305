use anyhow::Context;
use clap::Parser;
use small_library::config::toml_config::TomlConfig;
use small_library::core::Clock;
use small_library::utils::error::{AppError, AppResult};
use small_library::utils::logger;
use small_library::{CliConfig, Console, DisplaySettings, FixedClock, Settings, SystemClock};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, &settings.log_level);
    tracing::info!("Starting small-library");
    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    let result = match settings.today {
        Some(day) => {
            tracing::info!("📅 Clock pinned to {}", day);
            run_console(FixedClock(day), settings.display)
        }
        None => run_console(SystemClock, settings.display),
    };

    result.context("console session failed")?;
    tracing::info!("Session finished");
    Ok(())
}

fn load_settings(cli: &CliConfig) -> AppResult<Settings> {
    let file = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    Settings::resolve(&file, &cli.overrides())
}

fn run_console<C: Clock>(clock: C, display: DisplaySettings) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), clock, display);
    console.run()
}
