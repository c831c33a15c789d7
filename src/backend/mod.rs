//! Search backend collaborator interface.
//!
//! Gazette never touches an index directly. Everything it needs from the
//! full-text engine — boosted search, recency listing, fuzzy suggestion —
//! goes through the [`SearchBackend`] trait, so the relevance layer stays
//! testable against a mock and portable across index implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::query::SearchRequest;

/// Sentinel placed by the backend highlighter before a matched span.
///
/// Private-use character, so it cannot collide with article text.
pub const HIGHLIGHT_PRE_TAG: &str = "\u{e000}";

/// Sentinel placed by the backend highlighter after a matched span.
pub const HIGHLIGHT_POST_TAG: &str = "\u{e001}";

/// How a multi-term clause combines its terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Every term must match (AND-search).
    And,
    /// Any term may match (free-text search).
    Or,
}

/// Distance metric used by the backend's fuzzy suggester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Classic edit distance.
    Levenshtein,
    /// Jaro-Winkler similarity, prefix-weighted.
    JaroWinkler,
    /// Character n-gram overlap.
    Ngram,
}

impl DistanceMetric {
    /// The metrics consulted for a suggestion round, in voting order.
    pub const ALL: [DistanceMetric; 3] = [
        DistanceMetric::Levenshtein,
        DistanceMetric::JaroWinkler,
        DistanceMetric::Ngram,
    ];
}

/// Highlighting directive attached to a search request.
///
/// Asks the backend to return, per hit, an excerpt of `field` with every
/// matched span wrapped in `(pre_tag, post_tag)`. The sentinels are opaque
/// to the backend; the span reconstructor strips them out again.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSpec {
    /// Field to extract highlight fragments from.
    pub field: String,
    /// Maximum fragment length in characters.
    pub fragment_size: usize,
    /// Maximum number of fragments per document.
    pub fragment_count: usize,
    /// Marker inserted before each matched span.
    pub pre_tag: String,
    /// Marker inserted after each matched span.
    pub post_tag: String,
}

impl Default for HighlightSpec {
    fn default() -> Self {
        HighlightSpec {
            field: "title".to_string(),
            fragment_size: 200,
            fragment_count: 1,
            pre_tag: HIGHLIGHT_PRE_TAG.to_string(),
            post_tag: HIGHLIGHT_POST_TAG.to_string(),
        }
    }
}

/// A single document returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHit {
    /// The document ID.
    pub id: String,
    /// Stored title, as indexed.
    pub title: String,
    /// Link to the article.
    pub link: String,
    /// Publish date, if the document carries one.
    pub published: Option<DateTime<Utc>>,
    /// Sentinel-delimited highlight excerpt of the title field, when the
    /// request asked for one and the highlighter produced a fragment.
    pub title_fragment: Option<String>,
}

/// Capabilities required from the search index collaborator.
///
/// Implementations must tolerate concurrent calls; the suggestion ranker
/// issues one `suggest` per distance metric without waiting in between.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a boosted search request, returning hits ordered by
    /// descending relevance score. Clause order is significant: boost
    /// stacking follows the request's clause sequence.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<BackendHit>>;

    /// List the most recently published documents, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<BackendHit>>;

    /// Propose up to `limit` terms near `term` in `field` under the given
    /// distance metric. Candidate order within the returned list is
    /// preserved by the caller but carries no ranking guarantee.
    async fn suggest(
        &self,
        field: &str,
        term: &str,
        metric: DistanceMetric,
        accuracy: f32,
        limit: usize,
    ) -> Result<Vec<String>>;
}
