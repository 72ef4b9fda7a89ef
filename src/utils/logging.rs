//! Logger setup.

use env_logger::Builder;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "TASKBOARD_LOG";

/// Picks the filter: `TASKBOARD_LOG`, then `RUST_LOG`, then `default_filter`.
pub fn resolve_filter(default_filter: &str) -> String {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| default_filter.to_string())
}

/// Installs the global logger. Safe to call more than once; later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = resolve_filter(default_filter);
    let result = Builder::new()
        .parse_filters(&filter)
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with filter '{filter}'");
    }
}
