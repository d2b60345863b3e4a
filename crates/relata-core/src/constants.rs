/// relata version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum lag considered by discovery.
pub const DEFAULT_MAX_LAG: usize = 5;

/// Smallest `max_lag` that produces at least one window.
pub const MIN_MAX_LAG: usize = 2;

/// Environment variable read by the tracing filter.
pub const LOG_ENV_VAR: &str = "RELATA_LOG";
