//! Significance scoring: a simplified average treatment effect per lag.
//!
//! For a candidate `c` and each co-occurring candidate `x` in the same window
//! the contribution is `P(e at lag | c, x) - P(e at lag | not c, x)`. The
//! score is the elementwise mean over every `x`.

pub mod conditional;

use relata_core::{CompositeScore, LoneCandidatePolicy, Window};

pub use conditional::{effect_profile, prob_given_c_and_x, prob_given_notc_and_x, CauseState};

/// The columns and window one candidate is scored on.
#[derive(Debug, Clone, Copy)]
pub struct Contrast<'a> {
    pub cause: &'a [i64],
    pub effect: &'a [i64],
    pub window: Window,
    pub max_lag: usize,
}

impl<'a> Contrast<'a> {
    /// With-cause minus without-cause profile under an optional context
    /// condition.
    pub fn difference(&self, context: Option<&[i64]>) -> Vec<f64> {
        let with_cause = effect_profile(self, CauseState::Present, context);
        let without_cause = effect_profile(self, CauseState::Absent, context);
        with_cause
            .iter()
            .zip(&without_cause)
            .map(|(w, wo)| w - wo)
            .collect()
    }
}

/// Average the contrast over every co-occurring candidate's cause column.
///
/// With no co-occurring candidates the outcome is fixed by `policy`.
pub fn score(
    contrast: &Contrast<'_>,
    co_occurring: &[&[i64]],
    policy: LoneCandidatePolicy,
) -> CompositeScore {
    if co_occurring.is_empty() {
        return match policy {
            LoneCandidatePolicy::Zero => CompositeScore::zeros(contrast.max_lag),
            LoneCandidatePolicy::Unconditioned => CompositeScore::new(contrast.difference(None)),
        };
    }

    let mut avg = vec![0.0; contrast.max_lag + 1];
    for &x in co_occurring {
        for (acc, d) in avg.iter_mut().zip(contrast.difference(Some(x))) {
            *acc += d;
        }
    }
    let n = co_occurring.len() as f64;
    avg.iter_mut().for_each(|v| *v /= n);
    CompositeScore::new(avg)
}
