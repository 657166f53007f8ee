//! Case-aware substring search and replacement.
//!
//! The standard library only offers case-sensitive `find`/`replace`;
//! these helpers accept an explicit sensitivity flag, matching the
//! comparison mode used for path equality on case-insensitive
//! filesystems.

/// How string comparison treats letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Sensitive,
    Insensitive,
}

impl Case {
    fn chars_equal(self, a: char, b: char) -> bool {
        match self {
            Case::Sensitive => a == b,
            Case::Insensitive => a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// Find the byte offset of the first occurrence of `needle` in
/// `haystack`, starting the scan at byte offset `start`.
///
/// Returns `None` if `needle` is empty or does not occur. `start` must
/// lie on a char boundary of `haystack`.
pub fn find_from(haystack: &str, needle: &str, start: usize, case: Case) -> Option<usize> {
    if needle.is_empty() || start > haystack.len() {
        return None;
    }

    for (offset, _) in haystack[start..].char_indices() {
        if starts_with_at(&haystack[start + offset..], needle, case) {
            return Some(start + offset);
        }
    }

    None
}

/// Replace every occurrence of `from` in `source` with `to`, comparing
/// under `case`. Occurrences are found left to right and do not overlap;
/// replaced text is never rescanned.
///
/// Returns `source` unchanged when `from` is empty or absent.
pub fn replace(source: &str, from: &str, to: &str, case: Case) -> String {
    if from.is_empty() {
        return source.to_string();
    }

    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;

    while let Some(index) = find_from(source, from, cursor, case) {
        result.push_str(&source[cursor..index]);
        result.push_str(to);
        cursor = index + matched_len(&source[index..], from, case);
    }

    result.push_str(&source[cursor..]);
    result
}

/// Whether `haystack` begins with `needle` under `case`.
fn starts_with_at(haystack: &str, needle: &str, case: Case) -> bool {
    matched_len_inner(haystack, needle, case).is_some()
}

/// Byte length of the prefix of `haystack` that matches `needle`.
///
/// Callers only invoke this after `find_from` confirmed a match, so the
/// fallback length is never observed in practice.
fn matched_len(haystack: &str, needle: &str, case: Case) -> usize {
    matched_len_inner(haystack, needle, case).unwrap_or(needle.len())
}

fn matched_len_inner(haystack: &str, needle: &str, case: Case) -> Option<usize> {
    let mut hay = haystack.chars();
    let mut consumed = 0;

    for n in needle.chars() {
        let h = hay.next()?;
        if !case.chars_equal(h, n) {
            return None;
        }
        consumed += h.len_utf8();
    }

    Some(consumed)
}
