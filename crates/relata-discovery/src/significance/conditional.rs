//! Conditional effect-occurrence probabilities, bucketed by lag.

use super::Contrast;
use crate::search;

/// Which value of the candidate's cause column a time step must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseState {
    Present,
    Absent,
}

impl CauseState {
    fn matches(self, value: i64) -> bool {
        match self {
            Self::Present => value == 1,
            Self::Absent => value == 0,
        }
    }
}

/// `P(e at lag | cause in state, context holds)` for lags `0..=max_lag`.
///
/// The numerator counts effect occurrences at `t + lag` for every scanned
/// `t` that matches, with lags drawn from the window and stopping at the last
/// time step. The denominator counts matching time steps over the whole
/// table. Either being zero yields the all-zero vector.
pub fn effect_profile(
    contrast: &Contrast<'_>,
    state: CauseState,
    context: Option<&[i64]>,
) -> Vec<f64> {
    let Contrast {
        cause,
        effect,
        window,
        max_lag,
    } = *contrast;
    let n = effect.len();
    let matches = |t: usize| {
        cause.get(t).is_some_and(|&v| state.matches(v))
            && context.map_or(true, |x| x.get(t) == Some(&1))
    };

    let mut counts = vec![0.0; max_lag + 1];
    for t in (0..search::scan_limit(n, window)).filter(|&t| matches(t)) {
        for t1 in window.translate(t).range() {
            if t1 >= n {
                break;
            }
            if let Some(slot) = counts.get_mut(t1 - t) {
                *slot += effect[t1] as f64;
            }
        }
    }

    if counts.iter().sum::<f64>() == 0.0 {
        return vec![0.0; max_lag + 1];
    }
    let denominator = (0..n).filter(|&t| matches(t)).count();
    if denominator == 0 {
        return vec![0.0; max_lag + 1];
    }
    counts.iter().map(|c| c / denominator as f64).collect()
}

/// `P(e | c and x)` per lag.
pub fn prob_given_c_and_x(contrast: &Contrast<'_>, x: &[i64]) -> Vec<f64> {
    effect_profile(contrast, CauseState::Present, Some(x))
}

/// `P(e | not c and x)` per lag.
pub fn prob_given_notc_and_x(contrast: &Contrast<'_>, x: &[i64]) -> Vec<f64> {
    effect_profile(contrast, CauseState::Absent, Some(x))
}
