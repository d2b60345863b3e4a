use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::VariableIndex;

/// A directed cause -> effect pair of registered variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CausalRelation {
    pub cause: VariableIndex,
    pub effect: VariableIndex,
}

impl CausalRelation {
    pub const fn new(cause: VariableIndex, effect: VariableIndex) -> Self {
        Self { cause, effect }
    }
}

impl fmt::Display for CausalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.cause, self.effect)
    }
}
