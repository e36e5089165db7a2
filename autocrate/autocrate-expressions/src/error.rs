//! Error types for expression export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for expression export.
pub type ExpressionResult<T> = Result<T, ExpressionError>;

/// Errors that can occur while writing an expression file.
#[derive(Debug, Error)]
pub enum ExpressionError {
    /// The file could not be created or written.
    #[error("failed to write expressions to {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExpressionError {
    /// Wrap an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
