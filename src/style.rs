//! Platform path-style description.
//!
//! A `PathStyle` carries the directory separator convention and the case
//! sensitivity used for path comparison. It is passed explicitly into the
//! relative-path routines instead of being read from ambient process
//! state, so a caller can resolve paths for a foreign platform.

/// Separator and comparison convention for a filesystem path family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStyle {
    /// Primary directory separator, used when assembling output.
    pub separator: char,
    /// Alternate separator accepted on input, if the platform has one.
    pub alt_separator: Option<char>,
    /// Whether path comparison distinguishes case.
    pub case_sensitive: bool,
}

impl PathStyle {
    /// POSIX convention: `/` only, case-sensitive.
    pub const fn posix() -> Self {
        Self {
            separator: '/',
            alt_separator: None,
            case_sensitive: true,
        }
    }

    /// Windows convention: `\` primary, `/` accepted, case-insensitive.
    pub const fn windows() -> Self {
        Self {
            separator: '\\',
            alt_separator: Some('/'),
            case_sensitive: false,
        }
    }

    /// The convention of the platform this crate was compiled for.
    ///
    /// Case sensitivity follows the default filesystem of the target OS:
    /// insensitive on Windows and Apple platforms, sensitive elsewhere.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self {
                separator: '/',
                alt_separator: None,
                case_sensitive: !cfg!(any(target_os = "macos", target_os = "ios")),
            }
        }
    }

    /// Whether `c` delimits path segments under this style.
    pub fn is_separator(&self, c: char) -> bool {
        c == self.separator || Some(c) == self.alt_separator
    }

    /// Compare two characters under this style's case sensitivity.
    ///
    /// Any two separator characters compare equal, so a mixed-separator
    /// input still matches its normalized counterpart.
    pub fn chars_equal(&self, a: char, b: char) -> bool {
        if self.is_separator(a) && self.is_separator(b) {
            return true;
        }
        if self.case_sensitive {
            a == b
        } else {
            a.to_lowercase().eq(b.to_lowercase())
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_accepts_only_forward_slash() {
        let style = PathStyle::posix();
        assert!(style.is_separator('/'));
        assert!(!style.is_separator('\\'));
    }

    #[test]
    fn windows_accepts_both_separators() {
        let style = PathStyle::windows();
        assert!(style.is_separator('\\'));
        assert!(style.is_separator('/'));
    }

    #[test]
    fn case_insensitive_comparison_folds_case() {
        let style = PathStyle::windows();
        assert!(style.chars_equal('F', 'f'));
        assert!(style.chars_equal('\\', '/'));
        assert!(!style.chars_equal('a', 'b'));
    }

    #[test]
    fn case_sensitive_comparison_distinguishes_case() {
        let style = PathStyle::posix();
        assert!(!style.chars_equal('F', 'f'));
        assert!(style.chars_equal('F', 'F'));
    }
}
