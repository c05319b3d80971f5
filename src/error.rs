//! Error types for Fileplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Fileplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in Fileplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// No input file was given on the command line.
    #[error("Expected filename in arguments")]
    MissingArgument,

    /// The input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not UTF-8 text.
    #[error("Malformed file: {path} is not valid UTF-8 text")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A record in the body could not be parsed.
    #[error("Malformed file: record {record}: {reason}")]
    MalformedFile { record: usize, reason: String },

    /// A `##KEY: VALUE` header line carried an unusable value.
    #[error("Invalid {key} directive: {value:?}")]
    InvalidDirective { key: String, value: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a read error, distinguishing a missing file from other failures.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileOpen { path, source }
        }
    }

    /// Create an InvalidEncoding error.
    pub fn invalid_encoding(path: PathBuf, source: std::string::FromUtf8Error) -> Self {
        Self::InvalidEncoding { path, source }
    }

    /// Create a MalformedFile error.
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFile {
            record,
            reason: reason.into(),
        }
    }

    /// Create an InvalidDirective error.
    pub fn invalid_directive(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDirective {
            key: key.into(),
            value: value.into(),
        }
    }
}
