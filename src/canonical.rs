//! Path canonicalization.
//!
//! Resolves arbitrary path input to an absolute, symlink-free form.
//! Relative input is resolved against the current working directory.
//! This is the one place in the crate that touches the filesystem during
//! path computation; failures propagate to the caller unchanged.

use crate::error::{PathError, Result};
use std::path::{Path, PathBuf};

/// Canonicalize `path` to an absolute, fully-resolved form.
///
/// Uses `dunce` so Windows results come back as legacy drive-letter
/// paths rather than `\\?\` verbatim paths.
pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyInput { arg: "path" });
    }

    let resolved = dunce::canonicalize(path).map_err(|source| PathError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::trace!(input = %path.display(), resolved = %resolved.display(), "canonicalized path");

    Ok(resolved)
}

/// Canonicalize `path` and return it as a `String`.
///
/// Paths that are not valid Unicode are lossily converted; the relative
/// path routines operate on text, matching the platform convention of
/// textual path exchange.
pub fn canonical_string(path: impl AsRef<Path>) -> Result<String> {
    let resolved = canonicalize(path)?;
    Ok(resolved.to_string_lossy().into_owned())
}
