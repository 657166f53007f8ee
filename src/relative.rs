//! Relative path computation.
//!
//! Computes the shortest relative expression from one absolute path to
//! another: `..` segments walk up out of the base, then the remainder of
//! the target is appended. Paths on different roots have no relative
//! expression, so the target is returned unchanged.
//!
//! The core routine is pure and stateless. It operates on canonical path
//! strings and never touches the filesystem; all I/O happens in the
//! [`crate::canonical`] collaborator before the computation starts.

use crate::canonical::canonical_string;
use crate::error::{PathError, Result};
use crate::style::PathStyle;

/// Compute the relative path from `base` to `target`.
///
/// Both inputs are canonicalized first, so relative input is resolved
/// against the current working directory and symlinks are followed.
/// Comparison uses the host platform's separator and case convention.
///
/// Returns `"."` when both inputs denote the same path, and the
/// canonical `target` verbatim when the two paths share no root.
///
/// # Errors
///
/// `PathError::EmptyInput` if either argument is empty, and
/// `PathError::Filesystem` if canonicalization fails.
pub fn relative_path(base: &str, target: &str) -> Result<String> {
    if base.is_empty() {
        return Err(PathError::EmptyInput { arg: "base" });
    }
    if target.is_empty() {
        return Err(PathError::EmptyInput { arg: "target" });
    }

    let base = canonical_string(base)?;
    let target = canonical_string(target)?;

    let result = relative_path_between(&PathStyle::host(), &base, &target);
    tracing::debug!(%base, %target, %result, "computed relative path");

    Ok(result)
}

/// Compute the relative path from `base` to `target`, both already in
/// canonical form, under an explicit [`PathStyle`].
///
/// Pure and side-effect free: identical inputs always produce identical
/// output, and the function is safe to call concurrently without
/// coordination.
///
/// A trailing separator on `target` is preserved in the result; a
/// trailing separator on either input is otherwise insignificant, so two
/// paths differing only by one yield `"."`.
pub fn relative_path_between(style: &PathStyle, base: &str, target: &str) -> String {
    let from: Vec<char> = base.chars().collect();
    let to: Vec<char> = target.chars().collect();

    // Different roots cannot share a relative expression.
    if !roots_equal(style, &from, &to) {
        return target.to_string();
    }

    let mut common = common_path_length(style, &from, &to);
    if common == 0 {
        return target.to_string();
    }

    // Trailing separators are not significant for comparison.
    let mut from_len = from.len();
    if ends_in_separator(style, &from) {
        from_len -= 1;
    }
    let to_ends_in_separator = ends_in_separator(style, &to);
    let mut to_len = to.len();
    if to_ends_in_separator {
        to_len -= 1;
    }

    if from_len == to_len && common >= from_len {
        return ".".to_string();
    }

    // One ".." per base segment past the common prefix, then the
    // remainder of the target, joined once at the end.
    let mut segments: Vec<String> = Vec::new();

    if common < from_len {
        segments.push("..".to_string());
        for i in common + 1..from_len {
            if style.is_separator(from[i]) {
                segments.push("..".to_string());
            }
        }
    } else if common < to.len() && style.is_separator(to[common]) {
        // No parent segments: swallow the separator that would otherwise
        // lead the remainder.
        common += 1;
    }

    let mut difference_len = to_len as isize - common as isize;
    if to_ends_in_separator {
        difference_len += 1;
    }
    if difference_len > 0 {
        let remainder: String = to[common..common + difference_len as usize].iter().collect();
        segments.push(remainder);
    }

    let separator = style.separator.to_string();
    segments.join(separator.as_str())
}

/// Whether the last character of `path` is a directory separator.
fn ends_in_separator(style: &PathStyle, path: &[char]) -> bool {
    matches!(path.last(), Some(&c) if style.is_separator(c))
}

/// Length in characters of the root portion of `path`.
///
/// POSIX roots are the single leading separator. Windows-style paths
/// additionally have drive-letter roots (`C:`, `C:\`) and UNC roots
/// spanning server and share (`\\server\share`).
fn root_length(style: &PathStyle, path: &[char]) -> usize {
    if style.separator == '\\' {
        // UNC: both leading separators, the server name, and the share.
        if path.len() >= 2 && style.is_separator(path[0]) && style.is_separator(path[1]) {
            let mut i = 2;
            while i < path.len() && !style.is_separator(path[i]) {
                i += 1;
            }
            if i < path.len() {
                i += 1;
                while i < path.len() && !style.is_separator(path[i]) {
                    i += 1;
                }
            }
            return i;
        }

        // Drive letter, with the separator when present.
        if path.len() >= 2 && path[0].is_ascii_alphabetic() && path[1] == ':' {
            if path.len() >= 3 && style.is_separator(path[2]) {
                return 3;
            }
            return 2;
        }
    }

    if !path.is_empty() && style.is_separator(path[0]) {
        return 1;
    }

    0
}

/// Whether two paths sit on the same root, compared under the style's
/// case sensitivity.
fn roots_equal(style: &PathStyle, from: &[char], to: &[char]) -> bool {
    let from_root = root_length(style, from);
    let to_root = root_length(style, to);

    from_root == to_root && (0..from_root).all(|i| style.chars_equal(from[i], to[i]))
}

/// Count of leading characters the two paths share, truncated so the
/// count never splits a path segment mid-name.
fn common_path_length(style: &PathStyle, from: &[char], to: &[char]) -> usize {
    let max = from.len().min(to.len());
    let mut common = 0;
    while common < max && style.chars_equal(from[common], to[common]) {
        common += 1;
    }

    if common == 0 {
        return 0;
    }

    // A count reaching the end of either path is a segment boundary only
    // if the other path ends or continues with a separator.
    if common == from.len() && (common == to.len() || style.is_separator(to[common])) {
        return common;
    }
    if common == to.len() && style.is_separator(from[common]) {
        return common;
    }

    // Otherwise back up to the last whole segment.
    while common > 0 && !style.is_separator(from[common - 1]) {
        common -= 1;
    }

    common
}
