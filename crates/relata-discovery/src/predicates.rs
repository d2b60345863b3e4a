//! Windowed predicates over binary columns.
//!
//! Absolute windows are clipped at the last time step; nothing past the end
//! of a column is ever read.

use relata_core::Window;

/// The cause column equals 1 at `t`.
pub fn cause_holds_at(cause: &[i64], t: usize) -> bool {
    cause.get(t) == Some(&1)
}

/// The effect column sums to a positive value over the absolute window.
pub fn effect_holds_in(effect: &[i64], window: Window) -> bool {
    in_bounds(effect, window).iter().sum::<i64>() > 0
}

/// 1 if the cause holds at `t` and the effect holds somewhere in `window`
/// translated to `t`, else 0.
pub fn c_leadsto_e_in(cause: &[i64], effect: &[i64], window: Window, t: usize) -> usize {
    usize::from(cause_holds_at(cause, t) && effect_holds_in(effect, window.translate(t)))
}

/// The slice of `column` covered by the absolute `window`, clipped to the
/// column length.
pub(crate) fn in_bounds(column: &[i64], window: Window) -> &[i64] {
    match column.len().checked_sub(1).and_then(|last| window.clip(last)) {
        Some(w) => &column[w.start..=w.end],
        None => &[],
    }
}

/// Number of time steps where the column equals 1.
pub(crate) fn occurrences(column: &[i64]) -> usize {
    column.iter().filter(|&&v| v == 1).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EFFECT: [i64; 5] = [0, 0, 1, 0, 1];

    #[test]
    fn cause_out_of_range_does_not_hold() {
        assert!(!cause_holds_at(&[1, 0], 2));
        assert!(cause_holds_at(&[1, 0], 0));
    }

    #[test]
    fn effect_window_is_inclusive() {
        assert!(effect_holds_in(&EFFECT, Window::new(0, 2)));
        assert!(!effect_holds_in(&EFFECT, Window::new(0, 1)));
    }

    #[test]
    fn effect_window_past_the_end_is_clipped() {
        assert!(effect_holds_in(&EFFECT, Window::new(4, 7)));
        assert!(!effect_holds_in(&EFFECT, Window::new(5, 7)));
        assert!(!effect_holds_in(&[], Window::new(0, 1)));
    }

    #[test]
    fn leadsto_requires_both_sides() {
        let cause = [1, 0, 0, 0, 0];
        assert_eq!(c_leadsto_e_in(&cause, &EFFECT, Window::new(1, 2), 0), 1);
        assert_eq!(c_leadsto_e_in(&cause, &EFFECT, Window::new(1, 2), 1), 0);
        assert_eq!(c_leadsto_e_in(&cause, &EFFECT, Window::new(3, 3), 0), 0);
    }
}
