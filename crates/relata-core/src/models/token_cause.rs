use serde::{Deserialize, Serialize};

use super::CausalRelation;

/// One observed instance of a relation firing: the cause held at
/// `cause_time` and the effect held at `effect_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCause {
    pub relation: CausalRelation,
    pub cause_time: usize,
    pub effect_time: usize,
}

impl TokenCause {
    pub const fn new(relation: CausalRelation, cause_time: usize, effect_time: usize) -> Self {
        Self {
            relation,
            cause_time,
            effect_time,
        }
    }

    /// Offset between the cause and the effect.
    pub fn lag(&self) -> usize {
        self.effect_time - self.cause_time
    }
}
