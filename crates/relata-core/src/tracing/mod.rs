//! Tracing setup and span definitions.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
