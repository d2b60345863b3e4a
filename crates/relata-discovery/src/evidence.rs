//! Token-level evidence extraction.

use relata_core::Window;

use crate::predicates;

/// Absolute time steps inside `window` translated to `t` where the effect
/// equals 1, in ascending order. Empty unless the relation fires at `t`.
pub fn token_effect_times(cause: &[i64], effect: &[i64], window: Window, t: usize) -> Vec<usize> {
    if predicates::c_leadsto_e_in(cause, effect, window, t) == 0 {
        return Vec::new();
    }
    let absolute = window.translate(t);
    predicates::in_bounds(effect, absolute)
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == 1)
        .map(|(offset, _)| absolute.start + offset)
        .collect()
}
