//! Error handling for texfrag emitters
//!
//! This module provides a unified error type and result type for all
//! emitter operations. Every failure is raised by the call that triggers it,
//! before any emitter state is touched.

use thiserror::Error;

/// Emitter error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    /// A row did not carry exactly one value per declared column
    #[error(
        "expected exactly {expected} values per row, got {actual} \
         (use CellValue::Missing for blank cells)"
    )]
    ColumnCount { expected: usize, actual: usize },

    /// The figure column counter left `1..=figs_per_row`
    #[error("figure grid is in an invalid state: column {column} of {figs_per_row}")]
    InvalidGridState { column: usize, figs_per_row: usize },

    /// Operation that is reserved but not implemented
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// Invalid structural parameter given at construction
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Input data (CSV, JSON, TOML, YAML) could not be decoded
    #[cfg(feature = "data-loading")]
    #[error("Data error: {message}")]
    Data { message: String },
}

/// Result type for emitter operations
pub type EmitResult<T> = Result<T, EmitError>;

// Convenience constructors for errors
impl EmitError {
    pub fn column_count(expected: usize, actual: usize) -> Self {
        EmitError::ColumnCount { expected, actual }
    }

    pub fn unsupported(operation: impl Into<String>) -> Self {
        EmitError::Unsupported {
            operation: operation.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        EmitError::InvalidConfig {
            message: message.into(),
        }
    }

    #[cfg(feature = "data-loading")]
    pub fn data(message: impl Into<String>) -> Self {
        EmitError::Data {
            message: message.into(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<csv::Error> for EmitError {
    fn from(err: csv::Error) -> Self {
        EmitError::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<toml::de::Error> for EmitError {
    fn from(err: toml::de::Error) -> Self {
        EmitError::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_yaml::Error> for EmitError {
    fn from(err: serde_yaml::Error) -> Self {
        EmitError::data(err.to_string())
    }
}
