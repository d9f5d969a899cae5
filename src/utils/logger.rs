use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Filter used when `RUST_LOG` is unset. `verbose` raises the level to at
/// least debug and lets other crates log at info.
pub fn filter_directive(level: &str, verbose: bool) -> String {
    match (verbose, level) {
        (true, "trace") => "soil_advisor=trace,info".to_string(),
        (true, _) => "soil_advisor=debug,info".to_string(),
        (false, level) => format!("soil_advisor={}", level),
    }
}

fn default_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

pub fn init_cli_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured output for log collectors; selected with `[logging] json = true`.
pub fn init_json_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

pub fn init_logger(level: &str, verbose: bool, json: bool) {
    if json {
        init_json_logger(level, verbose);
    } else {
        init_cli_logger(level, verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_sets_directive() {
        assert_eq!(filter_directive("warn", false), "soil_advisor=warn");
        assert_eq!(filter_directive("error", false), "soil_advisor=error");
        assert_eq!(filter_directive(DEFAULT_LEVEL, false), "soil_advisor=info");
        assert_eq!(filter_directive("trace", false), "soil_advisor=trace");
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        assert_eq!(filter_directive("warn", true), "soil_advisor=debug,info");
        assert_eq!(filter_directive("trace", true), "soil_advisor=trace,info");
    }
}
