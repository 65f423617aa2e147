//! Error types for the data-loader crate.
//!
//! Only loading can fail. Once a [`crate::Dataset`] exists, indexing and
//! normalization are infallible: bad links are dropped and bad numbers
//! become [`crate::Numeric::NAN`].

use thiserror::Error;

/// Errors that can occur while loading the movie database file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid JSON or does not have the expected shape
    ///
    /// `line` and `column` come straight from serde_json so the user can
    /// jump to the offending spot.
    #[error("Malformed data in {file} at line {line}, column {column}: {reason}")]
    MalformedData {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },
}

impl DataLoadError {
    pub(crate) fn malformed(file: impl Into<String>, err: serde_json::Error) -> Self {
        DataLoadError::MalformedData {
            file: file.into(),
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
