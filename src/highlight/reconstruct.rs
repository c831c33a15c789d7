//! Highlight span reconstruction.
//!
//! The backend highlighter wraps matched spans in private sentinel markers,
//! and it may mark more of a term than the user's literal query justifies
//! (stemmed or wildcard-expanded matches). This module rebuilds the
//! fragment into display markup, trimming every span back to the longest
//! prefix that actually occurs in the raw query — never more.

use crate::backend::HighlightSpec;
use crate::highlight::content::HighlightTags;
use crate::query::sanitize::WILDCARD;

/// Rebuilds sentinel-delimited backend fragments into display-ready
/// highlighted text.
#[derive(Debug, Clone)]
pub struct SpanReconstructor {
    pre_tag: String,
    post_tag: String,
    tags: HighlightTags,
}

impl SpanReconstructor {
    /// Create a reconstructor for the given sentinel pair and display tags.
    pub fn new(spec: &HighlightSpec, tags: HighlightTags) -> Self {
        SpanReconstructor {
            pre_tag: spec.pre_tag.clone(),
            post_tag: spec.post_tag.clone(),
            tags,
        }
    }

    /// Reconstruct one highlight fragment against the original query.
    ///
    /// Returns `None` for an empty fragment. A trailing wildcard on the
    /// query is stripped before verification; if nothing remains, the
    /// fragment is returned unmodified, since there is no query text to
    /// verify highlights against.
    ///
    /// Anomalies degrade locally: a span without an end delimiter is
    /// copied through verbatim, and a span whose start matches nothing in
    /// the query is emitted unhighlighted.
    pub fn reconstruct(&self, fragment: &str, query: &str) -> Option<String> {
        if fragment.is_empty() {
            return None;
        }

        let query = query.strip_suffix(WILDCARD).unwrap_or(query);
        if query.trim().is_empty() {
            return Some(fragment.to_string());
        }
        let query_lower = query.to_lowercase();

        let mut out = String::with_capacity(fragment.len());
        let mut segments = fragment.split(self.pre_tag.as_str());

        // Text before the first marker is never highlighted.
        if let Some(head) = segments.next() {
            out.push_str(head);
        }

        for segment in segments {
            match segment.split_once(self.post_tag.as_str()) {
                Some((matched, remainder)) => {
                    let verified = verified_prefix_len(matched, &query_lower);
                    if verified > 0 {
                        out.push_str(&self.tags.open);
                        out.push_str(&matched[..verified]);
                        out.push_str(&self.tags.close);
                        out.push_str(&matched[verified..]);
                    } else {
                        out.push_str(matched);
                    }
                    out.push_str(remainder);
                }
                // No end delimiter: pass the segment through untouched.
                None => out.push_str(segment),
            }
        }

        Some(out)
    }
}

/// Byte length of the longest prefix of `matched` that occurs, case
/// insensitively, anywhere inside the query.
fn verified_prefix_len(matched: &str, query_lower: &str) -> usize {
    let mut prefix = String::new();
    let mut best = 0;

    for (idx, ch) in matched.char_indices() {
        prefix.extend(ch.to_lowercase());
        if query_lower.contains(&prefix) {
            best = idx + ch.len_utf8();
        } else {
            break;
        }
    }

    best
}
