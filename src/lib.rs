//! Repath: relative path computation and filesystem path utilities.
//!
//! The core is [`relative_path`], which computes the shortest relative
//! expression between two filesystem paths using `..` segments, the way
//! common operating systems express one. Around it sit the pieces the
//! computation needs: canonicalization, a platform [`PathStyle`]
//! describing separators and case sensitivity, and case-aware text
//! search. A thread-safe random generator and a file-move helper round
//! out the toolkit.

pub mod canonical;
pub mod error;
pub mod fsops;
pub mod random;
pub mod relative;
pub mod style;
pub mod text;

pub use canonical::{canonical_string, canonicalize};
pub use error::{PathError, Result};
pub use relative::{relative_path, relative_path_between};
pub use style::PathStyle;
