//! Observers narrating a discovery run.

use relata_core::{CompositeScore, IDiscoveryObserver, ScoredCause, TypeLevelCause, Window};
use tracing::{debug, info};

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IDiscoveryObserver for NoopObserver {}

/// Narrates through `tracing`.
///
/// Totals go out at `info`. Per-window and per-candidate detail goes out at
/// `info` when verbose and at `debug` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    verbose: bool,
}

impl TracingObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl IDiscoveryObserver for TracingObserver {
    fn on_windows_created(&self, windows: &[Window]) {
        info!(count = windows.len(), "created windows");
        for window in windows {
            if self.verbose {
                info!(%window, "window");
            } else {
                debug!(%window, "window");
            }
        }
    }

    fn on_cause_search_started(&self, cause: &str, effect: &str) {
        if self.verbose {
            info!(cause, effect, "finding valid windows");
        } else {
            debug!(cause, effect, "finding valid windows");
        }
    }

    fn on_cause_search_finished(
        &self,
        cause: &str,
        effect: &str,
        type_level_causes: usize,
        token_events: usize,
    ) {
        info!(
            cause,
            effect, type_level_causes, token_events, "cause search finished"
        );
    }

    fn on_significance_computed(
        &self,
        cause: &TypeLevelCause,
        score: &CompositeScore,
        co_occurring: usize,
    ) {
        let total = score.total();
        if self.verbose {
            info!(relation = %cause.relation, window = %cause.window, co_occurring, total, "computed significance");
        } else {
            debug!(relation = %cause.relation, window = %cause.window, co_occurring, total, "computed significance");
        }
    }

    fn on_pruned(&self, kept: &[ScoredCause], removed: usize) {
        info!(kept = kept.len(), removed, "pruned type-level causes");
    }
}
