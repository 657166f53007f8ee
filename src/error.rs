//! Error types for path computation and filesystem helpers.

use std::path::PathBuf;

/// Errors produced by this crate.
///
/// There is no retry path anywhere: every computation is deterministic,
/// so a failed call fails identically on retry with the same inputs.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// An input path argument was empty. Raised before any computation.
    #[error("path argument `{arg}` must not be empty")]
    EmptyInput { arg: &'static str },

    /// A filesystem operation failed (canonicalization, move). The error
    /// is surfaced as-is; this crate never reinterprets it.
    #[error("filesystem operation failed for {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;
