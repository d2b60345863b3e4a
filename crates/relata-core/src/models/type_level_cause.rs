use serde::{Deserialize, Serialize};

use super::{CausalRelation, TokenCause, Window};

/// A candidate cause aggregated over one (relation, window) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeLevelCause {
    pub relation: CausalRelation,
    pub window: Window,
    /// Firings over cause occurrences. Always in `(0, 1]`.
    pub prob: f64,
    pub token_events: Vec<TokenCause>,
}

impl TypeLevelCause {
    pub fn new(
        relation: CausalRelation,
        window: Window,
        prob: f64,
        token_events: Vec<TokenCause>,
    ) -> Self {
        Self {
            relation,
            window,
            prob,
            token_events,
        }
    }

    /// Identity used for grouping and de-duplication.
    pub fn key(&self) -> (CausalRelation, Window) {
        (self.relation, self.window)
    }

    pub fn token_count(&self) -> usize {
        self.token_events.len()
    }
}
