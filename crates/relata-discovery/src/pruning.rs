//! Drop candidates whose summed significance is not strictly positive.

use relata_core::ScoredCause;

/// Result of a pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneResult {
    pub kept: usize,
    pub removed: usize,
}

/// Keep only significant candidates, preserving their relative order.
pub fn prune_in_place(scored: &mut Vec<ScoredCause>) -> PruneResult {
    let before = scored.len();
    scored.retain(ScoredCause::is_significant);
    PruneResult {
        kept: scored.len(),
        removed: before - scored.len(),
    }
}

/// Owning variant of [`prune_in_place`].
pub fn prune(mut scored: Vec<ScoredCause>) -> Vec<ScoredCause> {
    prune_in_place(&mut scored);
    scored
}
