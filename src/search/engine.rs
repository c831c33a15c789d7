//! The host-facing search engine.
//!
//! Orchestrates the full request flow: sanitize the raw query, issue the
//! boosted search, and post-process the outcome. An unsanitizable query
//! falls back to a recency listing; an empty result set triggers exactly
//! one suggestion round; a non-empty one has its title highlights rebuilt
//! and prefix-verified.
//!
//! Every request is handled statelessly: the trie, the request, and all
//! intermediate structures are built fresh per call, so concurrent
//! requests share nothing mutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::backend::{BackendHit, HighlightSpec, SearchBackend};
use crate::error::{GazetteError, Result};
use crate::highlight::content::{ContentHighlighter, HighlightTags};
use crate::highlight::reconstruct::SpanReconstructor;
use crate::query::builder::{BoostedQueryBuilder, DEFAULT_LIMIT};
use crate::query::sanitize::{sanitize, SanitizedQuery};
use crate::suggest::{rank_suggestions, SuggestionConfig};

/// Configuration for the search engine.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Field searched, boosted, and highlighted.
    pub field: String,
    /// Maximum hits per request, also used for the recency fallback.
    pub limit: usize,
    /// Highlighting directive sent to the backend.
    pub highlight: HighlightSpec,
    /// Display markup for highlighted spans.
    pub tags: HighlightTags,
    /// Suggestion round configuration.
    pub suggestions: SuggestionConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            field: "title".to_string(),
            limit: DEFAULT_LIMIT,
            highlight: HighlightSpec::default(),
            tags: HighlightTags::default(),
            suggestions: SuggestionConfig::default(),
        }
    }
}

/// One row of a search response.
///
/// For suggestion placeholders only `title` is populated, carrying the
/// suggested term for "did you mean" presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleHit {
    /// The document ID; empty for suggestion placeholders.
    pub id: String,
    /// Title with display highlight markup, or a suggested term.
    pub title: String,
    /// Link to the article; empty for suggestion placeholders.
    pub link: String,
    /// Publish date, when known.
    pub published: Option<DateTime<Utc>>,
}

impl ArticleHit {
    /// Placeholder row carrying only a suggested term.
    fn suggestion(term: String) -> Self {
        ArticleHit {
            id: String::new(),
            title: term,
            link: String::new(),
            published: None,
        }
    }
}

/// Search engine over a pluggable backend.
pub struct SearchEngine<B: SearchBackend> {
    backend: B,
    config: SearchConfig,
}

impl<B: SearchBackend> SearchEngine<B> {
    /// Create an engine with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, SearchConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(backend: B, config: SearchConfig) -> Self {
        SearchEngine { backend, config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Execute a search for a raw user query.
    ///
    /// Never returns null-like results: an unsanitizable query yields the
    /// recency listing, and an empty search yields suggestion placeholders
    /// (possibly none). Backend failures propagate once per request,
    /// unretried; cancellation surfaces as
    /// [`GazetteError::OperationCancelled`].
    pub async fn search(
        &self,
        raw_query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ArticleHit>> {
        let Some(query) = sanitize(raw_query) else {
            debug!("query sanitized to empty, listing recent articles");
            let hits = self
                .run_backend(self.backend.recent(self.config.limit), cancel)
                .await?;
            return Ok(hits.into_iter().map(|hit| self.plain_hit(hit)).collect());
        };

        let request = BoostedQueryBuilder::new()
            .with_field(&self.config.field)
            .with_limit(self.config.limit)
            .with_highlight(self.config.highlight.clone())
            .build(&query);

        let hits = self
            .run_backend(self.backend.search(&request), cancel)
            .await?;

        if hits.is_empty() {
            debug!(query = query.as_str(), "no hits, running suggestion round");
            return self.suggest_fallback(&query, cancel).await;
        }

        let reconstructor = SpanReconstructor::new(&self.config.highlight, self.config.tags.clone());
        let results = hits
            .into_iter()
            .map(|hit| {
                let title = hit
                    .title_fragment
                    .as_deref()
                    .and_then(|fragment| {
                        reconstructor.reconstruct(fragment, query.without_wildcard())
                    })
                    .unwrap_or_else(|| {
                        trace!(id = %hit.id, "no reconstructable fragment, using stored title");
                        hit.title.clone()
                    });
                ArticleHit {
                    id: hit.id,
                    title,
                    link: hit.link,
                    published: hit.published,
                }
            })
            .collect();

        Ok(results)
    }

    /// Highlight query-term matches in arbitrary content.
    ///
    /// Pure function, independent of the backend and of any search result
    /// format.
    pub fn highlight_content(&self, content: &str, query: &str, wrap_in_ellipsis: bool) -> String {
        ContentHighlighter::with_tags(self.config.tags.clone()).highlight(
            content,
            query,
            wrap_in_ellipsis,
        )
    }

    /// One suggestion round, mapped to placeholder rows.
    async fn suggest_fallback(
        &self,
        query: &SanitizedQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<ArticleHit>> {
        let candidates = rank_suggestions(
            &self.backend,
            &self.config.field,
            query.without_wildcard(),
            &self.config.suggestions,
            cancel,
        )
        .await?;

        Ok(candidates
            .into_iter()
            .map(|candidate| ArticleHit::suggestion(candidate.term))
            .collect())
    }

    /// Race a backend call against the request's cancellation token.
    async fn run_backend<F>(&self, call: F, cancel: &CancellationToken) -> Result<Vec<BackendHit>>
    where
        F: std::future::Future<Output = Result<Vec<BackendHit>>>,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(GazetteError::cancelled("search request cancelled")),
            hits = call => hits,
        }
    }

    /// Map a backend hit straight through, stored title as-is.
    fn plain_hit(&self, hit: BackendHit) -> ArticleHit {
        ArticleHit {
            id: hit.id,
            title: hit.title,
            link: hit.link,
            published: hit.published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_placeholder_shape() {
        let hit = ArticleHit::suggestion("rust".to_string());

        assert_eq!(hit.title, "rust");
        assert!(hit.id.is_empty());
        assert!(hit.link.is_empty());
        assert!(hit.published.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();

        assert_eq!(config.field, "title");
        assert_eq!(config.limit, 10);
        assert_eq!(config.suggestions.max_suggestions, 3);
    }
}
