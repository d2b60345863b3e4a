use crate::models::{CompositeScore, ScoredCause, TypeLevelCause, Window};

/// Narration hooks invoked by discovery at fixed extension points.
///
/// Observers see results but never influence them. Every method defaults to
/// a no-op. Implementations must be `Send + Sync` since the search may fan
/// out across threads.
pub trait IDiscoveryObserver: Send + Sync {
    /// The lag windows for one `build` have been enumerated.
    fn on_windows_created(&self, _windows: &[Window]) {}

    /// Search for `cause => effect` is starting.
    fn on_cause_search_started(&self, _cause: &str, _effect: &str) {}

    /// Search for `cause => effect` finished with the given totals.
    fn on_cause_search_finished(
        &self,
        _cause: &str,
        _effect: &str,
        _type_level_causes: usize,
        _token_events: usize,
    ) {
    }

    /// A significance score was computed for `cause`, averaged over
    /// `co_occurring` other candidates in the same window.
    fn on_significance_computed(
        &self,
        _cause: &TypeLevelCause,
        _score: &CompositeScore,
        _co_occurring: usize,
    ) {
    }

    /// Pruning finished.
    fn on_pruned(&self, _kept: &[ScoredCause], _removed: usize) {}
}
