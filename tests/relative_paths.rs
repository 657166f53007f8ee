//! Round-trip coverage for relative path computation: resolving the
//! returned expression against the base must reproduce the target.

use proptest::prelude::*;
use repath::style::PathStyle;
use repath::{canonicalize, relative_path, relative_path_between};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Resolve `relative` against `base` segment-wise, lexically.
fn lexically_apply(base: &str, relative: &str) -> String {
    if relative.starts_with('/') {
        return relative.to_string();
    }

    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    if relative != "." {
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." {
                segments.pop();
            } else {
                segments.push(segment);
            }
        }
    }

    format!("/{}", segments.join("/"))
}

/// Resolve a relative expression against a real base directory.
fn apply_on_disk(base: &Path, relative: &str) -> PathBuf {
    let mut out = base.to_path_buf();
    for segment in relative.split(std::path::MAIN_SEPARATOR) {
        match segment {
            "." | "" => {}
            ".." => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[test]
fn round_trip_against_real_directories() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("a").join("b").join("c");
    let target = temp_dir.path().join("a").join("x");
    fs::create_dir_all(&base).unwrap();
    fs::create_dir_all(&target).unwrap();

    let relative = relative_path(base.to_str().unwrap(), target.to_str().unwrap()).unwrap();
    assert_eq!(relative.matches("..").count(), 2);

    let canonical_base = canonicalize(&base).unwrap();
    let resolved = canonicalize(apply_on_disk(&canonical_base, &relative)).unwrap();
    assert_eq!(resolved, canonicalize(&target).unwrap());
}

#[test]
fn same_directory_resolves_to_dot() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("work");
    fs::create_dir_all(&dir).unwrap();

    let path = dir.to_str().unwrap();
    assert_eq!(relative_path(path, path).unwrap(), ".");
}

#[test]
fn relative_inputs_are_resolved_against_cwd() {
    // "." canonicalizes to the current working directory on any platform.
    assert_eq!(relative_path(".", ".").unwrap(), ".");
}

#[cfg(unix)]
#[test]
fn symlinked_base_is_resolved_before_comparison() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    let child = real.join("child");
    fs::create_dir_all(&child).unwrap();

    let link = temp_dir.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let relative = relative_path(link.to_str().unwrap(), child.to_str().unwrap()).unwrap();
    assert_eq!(relative, "child");
}

#[test]
fn missing_input_propagates_filesystem_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = relative_path(missing.to_str().unwrap(), temp_dir.path().to_str().unwrap());
    assert!(matches!(err, Err(repath::PathError::Filesystem { .. })));
}

fn path_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,6}", 0..5)
}

proptest! {
    /// Resolving the relative expression against the base reproduces the
    /// target, for arbitrary canonical POSIX paths under one root.
    #[test]
    fn lexical_round_trip(base_segments in path_segments(), target_segments in path_segments()) {
        let base = format!("/{}", base_segments.join("/"));
        let target = format!("/{}", target_segments.join("/"));

        let relative = relative_path_between(&PathStyle::posix(), &base, &target);
        let resolved = lexically_apply(&base, &relative);

        prop_assert_eq!(resolved, target);
    }

    /// Re-applying the computation to its own output is stable: the
    /// relative expression from a path to itself is always ".".
    #[test]
    fn self_relative_is_dot(segments in path_segments()) {
        let path = format!("/{}", segments.join("/"));
        prop_assert_eq!(relative_path_between(&PathStyle::posix(), &path, &path), ".");
    }
}
