use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter directive: `--verbose` beats `level`.
pub fn filter_directive(verbose: bool, level: &str) -> String {
    if verbose {
        "small_library=debug,info".to_string()
    } else {
        format!("small_library={}", level)
    }
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG`, when set, wins over the computed directive.
pub fn init_cli_logger(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, "warn"), "small_library=warn");
        assert_eq!(filter_directive(true, "warn"), "small_library=debug,info");
    }
}
