//! Value types produced and consumed by discovery.

mod composite_score;
mod discovery;
mod relation;
mod scored_cause;
mod token_cause;
mod type_level_cause;
mod window;

pub use composite_score::CompositeScore;
pub use discovery::Discovery;
pub use relation::CausalRelation;
pub use scored_cause::ScoredCause;
pub use token_cause::TokenCause;
pub use type_level_cause::TypeLevelCause;
pub use window::Window;
