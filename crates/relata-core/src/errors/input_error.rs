//! Input table and variable registration errors.

use super::error_code::{self, RelataErrorCode};

/// Errors raised before any discovery work when the input cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Combined validation report. Either list may be empty, never both.
    #[error("{}", describe_rejection(.missing_variables, .non_binary_columns))]
    Rejected {
        missing_variables: Vec<String>,
        non_binary_columns: Vec<String>,
    },

    #[error("column {column} has {actual} time steps, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column: {name}")]
    DuplicateColumn { name: String },

    #[error("variable already registered: {name}")]
    DuplicateVariable { name: String },
}

impl InputError {
    /// Names requested by the caller that the table does not carry.
    pub fn missing_variables(&self) -> &[String] {
        match self {
            Self::Rejected {
                missing_variables, ..
            } => missing_variables,
            _ => &[],
        }
    }

    /// Columns holding values outside {0, 1}.
    pub fn non_binary_columns(&self) -> &[String] {
        match self {
            Self::Rejected {
                non_binary_columns, ..
            } => non_binary_columns,
            _ => &[],
        }
    }
}

fn describe_rejection(missing: &[String], non_binary: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("variables not in table: [{}]", missing.join(", ")));
    }
    if !non_binary.is_empty() {
        parts.push(format!("non-binary columns: [{}]", non_binary.join(", ")));
    }
    parts.join("; ")
}

impl RelataErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
