//! Bidirectional name <-> index registry for the signals under study.

mod variable_store;

pub use variable_store::{VariableIndex, VariableStore};
