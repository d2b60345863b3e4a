use serde::{Deserialize, Serialize};

use super::{CompositeScore, TypeLevelCause};

/// A type-level cause together with its significance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCause {
    pub cause: TypeLevelCause,
    pub score: CompositeScore,
}

impl ScoredCause {
    pub fn new(cause: TypeLevelCause, score: CompositeScore) -> Self {
        Self { cause, score }
    }

    pub fn is_significant(&self) -> bool {
        self.score.is_significant()
    }
}
