//! # relata-discovery
//!
//! Token/type-level causal discovery over binary time series.
//!
//! For every candidate cause and every lag window, the search scans the table
//! for time steps where the cause fires and the effect follows inside the
//! window. Surviving type-level causes are scored by contrasting
//! `P(e | c, x)` against `P(e | not c, x)` for every co-occurring candidate
//! `x` in the same window, and pruned to those with positive total
//! significance.

pub mod engine;
pub mod evidence;
pub mod observer;
pub mod predicates;
pub mod pruning;
pub mod search;
pub mod significance;
pub mod validation;
pub mod windows;

pub use engine::CausalTree;
pub use observer::{NoopObserver, TracingObserver};
pub use pruning::PruneResult;
