//! Error types for the report module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The destination file could not be created.
    #[error("Failed to create report file: {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing or flushing rows failed.
    #[error("Failed to write report file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ReportError {
    /// Creates a write error for the given destination.
    pub fn write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Destination the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } => path.as_path(),
        }
    }
}
