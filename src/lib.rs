pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FixedClock, SystemClock};
pub use app::Console;
pub use config::{DisplaySettings, OutputFormat, Settings};
pub use crate::core::library::Library;
pub use domain::rules::{FINE_PER_DAY, LOAN_DAYS, MAX_LOANS_PER_PATRON};
pub use utils::error::{AppError, LibraryError, Result};
