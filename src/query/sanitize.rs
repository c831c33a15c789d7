//! Query sanitization.
//!
//! Raw user input is reduced to a backend-safe form before any request is
//! built: ASCII letters and digits survive, whitespace runs collapse to a
//! single interior space, and everything else is dropped outright. The
//! result always carries exactly one trailing `*` so the backend treats the
//! final token as a prefix.

/// Wildcard marker appended to every sanitized query.
pub const WILDCARD: char = '*';

/// A sanitized, wildcard-terminated query string.
///
/// Invariant: the text minus its trailing `*` is non-empty, contains only
/// ASCII alphanumerics and single interior spaces, and has no leading or
/// trailing whitespace. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedQuery {
    text: String,
}

impl SanitizedQuery {
    /// The full query string, wildcard included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The query string with the trailing wildcard stripped.
    pub fn without_wildcard(&self) -> &str {
        &self.text[..self.text.len() - WILDCARD.len_utf8()]
    }

    /// Whether the query contains more than one token.
    pub fn is_multi_token(&self) -> bool {
        self.without_wildcard().contains(' ')
    }
}

impl std::fmt::Display for SanitizedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Sanitize a raw user query.
///
/// Returns `None` when nothing alphanumeric survives; that is not an
/// error but the defined fallback branch — the caller lists recent
/// articles instead of searching, and no wildcard is appended.
///
/// Re-sanitizing the output (minus its wildcard) yields the same string.
pub fn sanitize(raw: &str) -> Option<SanitizedQuery> {
    let mut text = String::with_capacity(raw.len() + 1);

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            text.push(ch);
        } else if ch.is_whitespace() {
            // Collapse runs; leading whitespace never reaches the buffer.
            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
            }
        }
        // Punctuation, symbols, and non-ASCII are dropped, not replaced.
    }

    if text.ends_with(' ') {
        text.pop();
    }

    if text.is_empty() {
        return None;
    }

    text.push(WILDCARD);
    Some(SanitizedQuery { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_basic() {
        let query = sanitize("rust async").unwrap();

        assert_eq!(query.as_str(), "rust async*");
        assert_eq!(query.without_wildcard(), "rust async");
        assert!(query.is_multi_token());
    }

    #[test]
    fn test_sanitize_single_token() {
        let query = sanitize("rust").unwrap();

        assert_eq!(query.as_str(), "rust*");
        assert!(!query.is_multi_token());
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        let query = sanitize("  rust \t\n  async  ").unwrap();
        assert_eq!(query.as_str(), "rust async*");
    }

    #[test]
    fn test_sanitize_drops_punctuation_and_non_ascii() {
        // Dropped characters are removed entirely, never replaced.
        let query = sanitize("c++ & résumé!").unwrap();
        assert_eq!(query.as_str(), "c rsum*");

        let query = sanitize("a--b").unwrap();
        assert_eq!(query.as_str(), "ab*");
    }

    #[test]
    fn test_sanitize_punctuation_between_spaces() {
        let query = sanitize("data - engine").unwrap();
        assert_eq!(query.as_str(), "data engine*");
    }

    #[test]
    fn test_sanitize_empty_inputs() {
        assert!(sanitize("").is_none());
        assert!(sanitize("   \t\n").is_none());
        assert!(sanitize("!!! ... ---").is_none());
        assert!(sanitize("\u{1}\u{2}\u{3}").is_none());
    }

    #[test]
    fn test_sanitize_idempotent() {
        let samples = [
            "rust async",
            "  Hello,   World!  ",
            "c++2a",
            "données d'été",
            "*wild*cards*",
            "tab\there",
        ];

        for raw in samples {
            if let Some(first) = sanitize(raw) {
                let second = sanitize(first.without_wildcard()).unwrap();
                assert_eq!(first, second, "not idempotent for {raw:?}");
            }
        }
    }

    #[test]
    fn test_sanitize_output_invariant() {
        let samples = ["  a  b  ", "x!y?z", "0 1 2", "mixed CASE 42"];

        for raw in samples {
            let query = sanitize(raw).unwrap();
            let body = query.without_wildcard();

            assert!(!body.is_empty());
            assert!(body.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '));
            assert!(!body.starts_with(' '));
            assert!(!body.ends_with(' '));
            assert!(!body.contains("  "));
            assert!(query.as_str().ends_with(WILDCARD));
        }
    }
}
