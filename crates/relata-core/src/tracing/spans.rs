//! Span definitions for the discovery phases.

/// Create a build span.
#[macro_export]
macro_rules! discovery_build_span {
    ($effect:expr, $max_lag:expr) => {
        tracing::info_span!("relata.build", effect = %$effect, max_lag = $max_lag)
    };
}

/// Create a significance span.
#[macro_export]
macro_rules! significance_span {
    ($candidates:expr) => {
        tracing::info_span!("relata.significance", candidates = $candidates)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BUILD: &str = "relata.build";
    pub const SIGNIFICANCE: &str = "relata.significance";
}
