use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging with appropriate log level
///
/// Logs stay quiet unless a test fails or the LOG_LEVEL env var asks for more.
/// Call init_test_logging() at the start of each test; repeated calls are no-ops.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level_filter = std::env::var("LOG_LEVEL")
            .map(|level| parse_level(&level))
            .unwrap_or(LevelFilter::Error);

        Builder::from_default_env()
            .filter_level(level_filter)
            .is_test(true)
            .init();
    });
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Error,
    }
}
