//! Input normalization applied before parsing.
//!
//! The parser accepts any `&str` (so UTF-8 validity is already guaranteed by
//! the type), but raw text coming from a keyboard, clipboard, or network
//! source commonly carries CRLF line endings, decomposed Unicode, or stray
//! control characters that would otherwise make tokenization
//! platform-dependent. Callers that can't guarantee clean input should run
//! it through [`sanitize`] first; `parse` itself does not call this, since
//! the engine is defined to operate on whatever string it's given.

use unicode_normalization::UnicodeNormalization;

/// Normalizes line endings to `\n`, applies Unicode NFC canonical
/// composition, and strips control characters other than `\n` and `\t`.
///
/// NFC matters for tokenization: decomposed `e` + combining acute parses
/// differently from precomposed `é` when a delimiter run abuts it.
pub fn sanitize(input: &str) -> String {
    let line_endings_normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let normalized: String = line_endings_normalized.nfc().collect();
    normalized
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_crlf_to_lf() {
        assert_eq!(sanitize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn strips_control_characters_but_keeps_newline_and_tab() {
        let input = "a\u{0007}b\tc\nd";
        assert_eq!(sanitize(input), "ab\tc\nd");
    }

    #[test]
    fn composes_decomposed_accents() {
        let decomposed = "e\u{0301}"; // e + combining acute
        let sanitized = sanitize(decomposed);
        assert_eq!(sanitized.chars().count(), 1);
    }
}
