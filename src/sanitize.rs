//! Cleans raw user input into text a [`Label`][crate::Label] accepts.
//!
//! Sanitizing is lossy on purpose: accented Latin letters fold to their base letter, anything else
//! outside printable ASCII (emoji, CJK, control characters) is dropped, the result is uppercased
//! and clamped to [`MAX_CHARS`] characters.

use crate::label::MAX_CHARS;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Letters that NFKD leaves alone but that still have a plain ASCII
/// spelling.
fn fold_special(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'ẞ' => "SS",
        'Œ' => "OE",
        'œ' => "oe",
        'Æ' => "AE",
        'æ' => "ae",
        'Ø' => "O",
        'ø' => "o",
        'Đ' => "D",
        'đ' => "d",
        'Ħ' => "H",
        'ħ' => "h",
        'ı' => "i",
        'Ł' => "L",
        'ł' => "l",
        'Ŧ' => "T",
        'ŧ' => "t",
        _ => return None,
    })
}

/// Removes diacritics, drops everything outside printable ASCII (space through `~`) and
/// uppercases the rest. Does not clamp the length.
///
/// Text is decomposed with NFKD first, so accented letters lose their marks and compatibility
/// forms (full-width letters, ligatures, no-break spaces) become their plain equivalents.
#[must_use]
pub fn strip_accents_upper_ascii(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_special(c) {
            Some(folded) => expanded.push_str(folded),
            None => expanded.push(c),
        }
    }

    expanded
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| c == ' ' || c.is_ascii_graphic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Sanitizes one line of user input: ASCII only, uppercase, at most [`MAX_CHARS`] characters,
/// surrounding whitespace removed. Clamping happens before trimming, so `"  ab"` keeps its text.
///
/// The result is either empty or valid [`Line`][crate::Line] text.
#[must_use]
pub fn sanitize_line(text: &str) -> String {
    let upper = strip_accents_upper_ascii(text);
    let clamped = upper.get(..MAX_CHARS).unwrap_or(upper.as_str());

    clamped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_accents() {
        assert_eq!(sanitize_line("café"), "CAFE");
        assert_eq!(sanitize_line("Œuvre"), "OEUVRE");
        assert_eq!(sanitize_line("straße"), "STRASSE");
        assert_eq!(sanitize_line("Việt"), "VIET");
        assert_eq!(sanitize_line("ǎbc"), "ABC");
        assert_eq!(sanitize_line("Łódź"), "LODZ");
    }

    #[test]
    fn test_folds_compatibility_forms() {
        assert_eq!(sanitize_line("a\u{a0}b"), "A B");
        assert_eq!(sanitize_line("ＡＢ"), "AB");
        assert_eq!(sanitize_line("ﬁne"), "FINE");
    }

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(sanitize_line("hi 🎉"), "HI");
        assert_eq!(sanitize_line("日本go"), "GO");
        assert_eq!(sanitize_line("tab\tbed"), "TABBED");
    }

    #[test]
    fn test_clamps_then_trims() {
        assert_eq!(sanitize_line("abcdefghijk"), "ABCDEFGH");
        assert_eq!(sanitize_line("   team x   "), "TEAM");
        assert_eq!(sanitize_line("  ab"), "AB");
        assert_eq!(sanitize_line("   "), "");
    }
}
