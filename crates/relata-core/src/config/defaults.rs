//! Compiled defaults for every config field.

use crate::constants;

pub const DEFAULT_MAX_LAG: usize = constants::DEFAULT_MAX_LAG;
pub const DEFAULT_VERBOSE: bool = false;
pub const DEFAULT_PARALLEL: bool = false;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
