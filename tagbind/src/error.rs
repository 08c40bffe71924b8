//! Error types surfaced by the rewrite pipeline.

use crate::fix::RewriteError;
use std::path::PathBuf;

/// Failures that stop a rewrite before or while touching the target file.
#[derive(Debug, thiserror::Error)]
pub enum TagbindError {
    /// The target file does not exist.
    #[error("The file '{}' does not exist.", .0.display())]
    TargetNotFound(PathBuf),
    /// The target could not be read or is not valid UTF-8.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The rewritten text could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An element key cannot be used as a handler-name prefix.
    #[error("Invalid element key '{key}': {reason}")]
    InvalidKey {
        /// Offending key.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The element key list is empty.
    #[error("No element keys configured")]
    NoKeys,
    /// Queued edits could not be applied.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

impl TagbindError {
    /// Whether the error comes from user input (bad path or config)
    /// rather than from the platform.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::TargetNotFound(_) | Self::InvalidKey { .. } | Self::NoKeys
        )
    }
}
