//! Type-level cause identification for one (relation, window) pair.

use relata_core::{CausalRelation, TokenCause, TypeLevelCause, Window};

use crate::{evidence, predicates};

/// Scan time steps `0..T - (end - start)`, counting firings and collecting
/// token evidence.
///
/// Returns `None` if the relation never fires in the window. Otherwise the
/// probability is firings over every occurrence of the cause in the table.
pub fn identify_potential_cause(
    relation: CausalRelation,
    cause: &[i64],
    effect: &[i64],
    window: Window,
) -> Option<TypeLevelCause> {
    let steps = scan_limit(effect.len(), window);
    let mut firings = 0usize;
    let mut token_events = Vec::new();

    for t in 0..steps {
        firings += predicates::c_leadsto_e_in(cause, effect, window, t);
        for t_effect in evidence::token_effect_times(cause, effect, window, t) {
            token_events.push(TokenCause::new(relation, t, t_effect));
        }
    }

    if firings == 0 {
        return None;
    }
    // A firing implies at least one occurrence of the cause.
    let prob = firings as f64 / predicates::occurrences(cause) as f64;
    Some(TypeLevelCause::new(relation, window, prob, token_events))
}

/// Exclusive upper bound of the cause time steps scanned for `window`.
pub fn scan_limit(num_time_steps: usize, window: Window) -> usize {
    num_time_steps.saturating_sub(window.span())
}
