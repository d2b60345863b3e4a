//! # relata-core
//!
//! Foundation crate for relata.
//! Defines the value types, variable store, time-series table, errors,
//! config, constants, and the observer trait used by discovery.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod store;
pub mod table;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DiscoveryConfig, LoneCandidatePolicy, RelataConfig};
pub use errors::{RelataError, RelataResult};
pub use models::{
    CausalRelation, CompositeScore, Discovery, ScoredCause, TokenCause, TypeLevelCause, Window,
};
pub use store::{VariableIndex, VariableStore};
pub use table::TimeSeriesTable;
pub use traits::IDiscoveryObserver;
