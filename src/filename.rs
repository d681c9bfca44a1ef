//! Title and filename normalization.
//!
//! Titles arrive from uploads and video metadata with arbitrary Unicode and
//! filesystem-hostile punctuation. Two canonical forms are derived: a safe
//! display form for titles and link text, and a compact identifier form used
//! as the on-disk base name of every rendered artifact.

use unicode_normalization::UnicodeNormalization;

/// Characters stripped from display names regardless of platform.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Normalize a raw title to its safe display form.
///
/// Applies compatibility decomposition, drops everything outside ASCII,
/// strips filesystem-reserved punctuation, and collapses whitespace runs to a
/// single space.
pub fn sanitize_title(raw: &str) -> String {
    let ascii: String = raw
        .nfkd()
        .filter(|c| c.is_ascii() && !RESERVED.contains(c))
        .collect();
    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse a title to the identifier used for artifact base names.
///
/// Keeps ASCII alphanumerics and whitespace, then concatenates the remaining
/// words with each first letter uppercased. Interior casing is preserved, so
/// `"my TOP clip"` becomes `"MyTOPClip"`. An empty result is possible and the
/// storage layer refuses to write with one.
pub fn to_identifier(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_reserved_characters() {
        assert_eq!(sanitize_title("a<b>c:d\"e/f\\g|h?i*j"), "abcdefghij");
    }

    #[test]
    fn sanitize_transliterates_and_drops_unicode() {
        // NFKD splits accented letters into base + combining mark; the mark
        // falls outside ASCII and is dropped.
        assert_eq!(sanitize_title("Café Déjà Vu"), "Cafe Deja Vu");
        assert_eq!(sanitize_title("日本語 title"), "title");
    }

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_title("  too   many\tspaces \n here "), "too many spaces here");
    }

    #[test]
    fn identifier_strips_punctuation_and_concatenates() {
        assert_eq!(to_identifier("My Video: Intro!"), "MyVideoIntro");
        assert_eq!(to_identifier("hello world"), "HelloWorld");
    }

    #[test]
    fn identifier_preserves_interior_casing() {
        assert_eq!(to_identifier("my TOP clip"), "MyTOPClip");
        assert_eq!(to_identifier("iPhone review"), "IPhoneReview");
    }

    #[test]
    fn identifier_is_idempotent() {
        for raw in ["My Video: Intro!", "  spaced   out  ", "MiXeD CaSe", ""] {
            let once = to_identifier(raw);
            assert_eq!(to_identifier(&once), once);
        }
    }

    #[test]
    fn identifier_of_punctuation_only_is_empty() {
        assert_eq!(to_identifier("!!! ??? :::"), "");
    }
}
