//! Filesystem helpers.

use crate::error::{PathError, Result};
use std::path::Path;

/// Move a file from `src` to `dst`.
///
/// With `overwrite` set, an existing destination file is removed first;
/// a plain rename refuses to replace an existing file on some platforms.
/// Without it, the platform rename semantics apply unchanged.
pub fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>, overwrite: bool) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if overwrite && dst.is_file() {
        std::fs::remove_file(dst).map_err(|source| PathError::Filesystem {
            path: dst.to_path_buf(),
            source,
        })?;
    }

    std::fs::rename(src, dst).map_err(|source| PathError::Filesystem {
        path: src.to_path_buf(),
        source,
    })?;

    tracing::debug!(src = %src.display(), dst = %dst.display(), overwrite, "moved file");

    Ok(())
}
