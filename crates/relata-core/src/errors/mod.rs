//! Error handling for relata.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod lookup_error;

pub use config_error::ConfigError;
pub use error_code::RelataErrorCode;
pub use input_error::InputError;
pub use lookup_error::LookupError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RelataError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("not found: {0}")]
    NotFound(#[from] LookupError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RelataError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl RelataErrorCode for RelataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.error_code(),
            Self::NotFound(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type RelataResult<T> = Result<T, RelataError>;
