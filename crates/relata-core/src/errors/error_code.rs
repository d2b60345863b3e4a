//! Stable machine-readable error codes.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Every relata error maps to one stable code.
pub trait RelataErrorCode {
    fn error_code(&self) -> &'static str;
}
