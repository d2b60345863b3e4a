//! Variable lookup errors.

use super::error_code::{self, RelataErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("variable {name} is not registered")]
    NameNotFound { name: String },

    #[error("variable index {index} is not registered")]
    IndexNotFound { index: usize },
}

impl RelataErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        error_code::NOT_FOUND
    }
}
