//! Standalone content highlighting.
//!
//! Highlights exact and partial query-term matches inside arbitrary text,
//! independent of any search backend. A fresh trie is built from the
//! query's tokens per call; each word of the content is then checked for
//! the longest prefix that is itself a complete query token.

use crate::highlight::trie::Trie;

/// Marker wrapped around a highlighted excerpt when the caller asks for
/// ellipsis framing.
pub const ELLIPSIS: &str = "…";

/// Display markup wrapped around highlighted spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTags {
    /// Opening marker.
    pub open: String,
    /// Closing marker.
    pub close: String,
}

impl Default for HighlightTags {
    fn default() -> Self {
        HighlightTags {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

/// Highlights query-term prefixes in free-form content.
///
/// Pure and infallible: a word the trie cannot match is simply copied
/// through unhighlighted.
#[derive(Debug, Clone, Default)]
pub struct ContentHighlighter {
    tags: HighlightTags,
}

impl ContentHighlighter {
    /// Create a highlighter with the default `<mark>` tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a highlighter with custom display tags.
    pub fn with_tags(tags: HighlightTags) -> Self {
        ContentHighlighter { tags }
    }

    /// Highlight `query` term matches inside `content`.
    ///
    /// Words are maximal ASCII-alphanumeric runs; for each, the longest
    /// prefix that is a complete query token gets wrapped in the display
    /// tags, preserving the original case. Every other character passes
    /// through unchanged. With `wrap_in_ellipsis`, the whole result is
    /// framed in ellipsis markers.
    pub fn highlight(&self, content: &str, query: &str, wrap_in_ellipsis: bool) -> String {
        let trie = Trie::from_terms(query);

        let mut out = String::with_capacity(content.len() + ELLIPSIS.len() * 2);
        if wrap_in_ellipsis {
            out.push_str(ELLIPSIS);
        }

        let mut word = String::new();
        for ch in content.chars() {
            if ch.is_ascii_alphanumeric() {
                word.push(ch);
            } else {
                self.flush_word(&trie, &mut word, &mut out);
                out.push(ch);
            }
        }
        self.flush_word(&trie, &mut word, &mut out);

        if wrap_in_ellipsis {
            out.push_str(ELLIPSIS);
        }
        out
    }

    /// Emit the buffered word, highlighting its longest matched prefix.
    fn flush_word(&self, trie: &Trie, word: &mut String, out: &mut String) {
        if word.is_empty() {
            return;
        }

        let matched = trie.longest_match(&word.to_ascii_lowercase());
        if matched > 0 {
            // Words are pure ASCII, so char length equals byte length.
            out.push_str(&self.tags.open);
            out.push_str(&word[..matched]);
            out.push_str(&self.tags.close);
            out.push_str(&word[matched..]);
        } else {
            out.push_str(word);
        }
        word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(content: &str, query: &str) -> String {
        ContentHighlighter::new().highlight(content, query, false)
    }

    #[test]
    fn test_highlight_exact_match() {
        assert_eq!(
            highlight("rust is fast", "rust"),
            "<mark>rust</mark> is fast"
        );
    }

    #[test]
    fn test_highlight_partial_match_keeps_case() {
        assert_eq!(
            highlight("Rusty nails", "rust"),
            "<mark>Rust</mark>y nails"
        );
    }

    #[test]
    fn test_highlight_multiple_terms() {
        assert_eq!(
            highlight("async rust, sync python", "rust async"),
            "<mark>async</mark> <mark>rust</mark>, sync python"
        );
    }

    #[test]
    fn test_no_match_passes_through() {
        let content = "nothing to see here.";
        assert_eq!(highlight(content, "rust"), content);
    }

    #[test]
    fn test_boundary_characters_unchanged() {
        assert_eq!(
            highlight("(rust) [rust]!", "rust"),
            "(<mark>rust</mark>) [<mark>rust</mark>]!"
        );
    }

    #[test]
    fn test_word_must_start_with_term() {
        // "trust" contains "rust" but does not start with it.
        assert_eq!(highlight("trust rust", "rust"), "trust <mark>rust</mark>");
    }

    #[test]
    fn test_ellipsis_wrapping() {
        let highlighter = ContentHighlighter::new();
        assert_eq!(
            highlighter.highlight("rust news", "rust", true),
            "…<mark>rust</mark> news…"
        );
    }

    #[test]
    fn test_custom_tags() {
        let highlighter = ContentHighlighter::with_tags(HighlightTags {
            open: "<b>".to_string(),
            close: "</b>".to_string(),
        });
        assert_eq!(
            highlighter.highlight("rust", "rust", false),
            "<b>rust</b>"
        );
    }

    #[test]
    fn test_empty_query_and_content() {
        assert_eq!(highlight("some text", ""), "some text");
        assert_eq!(highlight("", "rust"), "");
    }

    #[test]
    fn test_non_ascii_content_is_boundary() {
        assert_eq!(
            highlight("rusté rust", "rust"),
            "<mark>rust</mark>é <mark>rust</mark>"
        );
    }
}
