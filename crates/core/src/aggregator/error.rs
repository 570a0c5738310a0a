//! Error types for the aggregator module.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an aggregation run.
///
/// Malformed data rows never surface here; they are reported through
/// [`SkipReason`](super::SkipReason) and dropped.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The input file could not be opened.
    #[error("Failed to open input file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row is missing or does not match the expected schema.
    #[error("Invalid header: {0}")]
    Header(#[from] HeaderError),

    /// The underlying reader failed while reading a record.
    #[error("Error reading line {line}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Ways the header row can fail validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The input has no rows at all.
    #[error("input is empty, expected a header row")]
    Missing,

    #[error("expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("expected column {index} to be '{expected}', got '{actual}'")]
    ColumnName {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

impl AggregateError {
    /// Creates a read error for the given 1-based line.
    pub fn read(line: u64, source: csv::Error) -> Self {
        Self::Read { line, source }
    }

    /// Line number the error is attributed to, if any.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Read { line, .. } => Some(*line),
            _ => None,
        }
    }
}
