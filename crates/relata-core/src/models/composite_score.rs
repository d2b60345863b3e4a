use serde::{Deserialize, Serialize};

/// Per-lag significance values, indexed by lag `0..=max_lag`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeScore {
    pub score: Vec<f64>,
}

impl CompositeScore {
    pub fn new(score: Vec<f64>) -> Self {
        Self { score }
    }

    /// All-zero score covering lags `0..=max_lag`.
    pub fn zeros(max_lag: usize) -> Self {
        Self {
            score: vec![0.0; max_lag + 1],
        }
    }

    /// Sum across all lags.
    pub fn total(&self) -> f64 {
        self.score.iter().sum()
    }

    /// A candidate survives pruning only if its total is strictly positive.
    pub fn is_significant(&self) -> bool {
        self.total() > 0.0
    }

    pub fn at_lag(&self, lag: usize) -> Option<f64> {
        self.score.get(lag).copied()
    }

    pub fn len(&self) -> usize {
        self.score.len()
    }

    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
    }
}
