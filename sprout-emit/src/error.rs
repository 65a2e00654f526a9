//! Error types for the sprout-emit crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating or emitting output files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Output path is empty")]
    EmptyPath,

    #[error("Unsafe output path '{path}': {reason}")]
    UnsafePath { path: String, reason: String },

    #[error("Output path listed more than once: {0}")]
    DuplicatePath(String),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EmitError {
    /// Whether the error came from the filesystem rather than from validation.
    pub fn is_io(&self) -> bool {
        matches!(self, EmitError::CreateDir { .. } | EmitError::Write { .. })
    }
}
