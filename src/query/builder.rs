//! Boosted query construction.
//!
//! Turns a sanitized query into a tiered sequence of boosted clauses whose
//! shape depends on token count. The exact full-phrase match always
//! dominates; proximity matches on multi-token queries outrank a plain AND
//! because near-adjacent terms signal higher intent; wildcard variants sit
//! below their exact counterparts since wildcard matching is looser.

use crate::backend::{HighlightSpec, Operator};
use crate::query::sanitize::SanitizedQuery;

/// Default result limit for a boosted search.
pub const DEFAULT_LIMIT: usize = 10;

/// Token distance used by proximity clauses.
pub const PROXIMITY_DISTANCE: u32 = 6;

/// A single boosted clause of a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchClause {
    /// The field to search in.
    pub field: String,
    /// The term or phrase to search for.
    pub term: String,
    /// How multiple tokens in the term combine.
    pub operator: Operator,
    /// The boost factor for this clause.
    pub boost: f32,
    /// Maximum token distance for proximity clauses.
    pub proximity: Option<u32>,
}

impl SearchClause {
    /// Create a new clause with neutral boost and no proximity.
    pub fn new<F, T>(field: F, term: T, operator: Operator) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        SearchClause {
            field: field.into(),
            term: term.into(),
            operator,
            boost: 1.0,
            proximity: None,
        }
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Set the proximity distance.
    pub fn with_proximity(mut self, distance: u32) -> Self {
        self.proximity = Some(distance);
        self
    }

    /// Human-readable clause description, mainly for logging.
    pub fn description(&self) -> String {
        let mut desc = format!("{}:{}^{}", self.field, self.term, self.boost);
        if let Some(distance) = self.proximity {
            desc.push_str(&format!("~{distance}"));
        }
        desc
    }
}

/// An ordered, boosted search request.
///
/// Clause order is significant: the backend accumulates boosts in the
/// sequence given here, so reordering changes scoring.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The clauses, in boost-priority order.
    pub clauses: Vec<SearchClause>,
    /// Maximum number of hits to return.
    pub limit: usize,
    /// Highlighting directive for the title field.
    pub highlight: HighlightSpec,
}

/// Builds tiered boosted requests against a single field.
#[derive(Debug, Clone)]
pub struct BoostedQueryBuilder {
    field: String,
    limit: usize,
    highlight: HighlightSpec,
}

impl BoostedQueryBuilder {
    /// Create a builder targeting the title field with default limit and
    /// highlight directive.
    pub fn new() -> Self {
        BoostedQueryBuilder {
            field: "title".to_string(),
            limit: DEFAULT_LIMIT,
            highlight: HighlightSpec::default(),
        }
    }

    /// Set the field to search and highlight.
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self.highlight.field = self.field.clone();
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the highlight directive.
    pub fn with_highlight(mut self, highlight: HighlightSpec) -> Self {
        self.highlight = highlight;
        self
    }

    /// Build the boosted request for a sanitized query.
    ///
    /// Multi-token queries emit five clauses, single-token queries three;
    /// see the module docs for the tiering rationale.
    pub fn build(&self, query: &SanitizedQuery) -> SearchRequest {
        let wildcarded = query.as_str();
        let exact = query.without_wildcard();

        let mut clauses = Vec::with_capacity(5);

        // Tier 1: exact full-phrase AND on the wildcarded query.
        clauses.push(SearchClause::new(&self.field, wildcarded, Operator::And).with_boost(100.0));

        if query.is_multi_token() {
            clauses.push(SearchClause::new(&self.field, exact, Operator::And).with_boost(50.0));
            clauses.push(SearchClause::new(&self.field, wildcarded, Operator::Or).with_boost(10.0));
            clauses.push(
                SearchClause::new(&self.field, exact, Operator::Or)
                    .with_boost(100.0)
                    .with_proximity(PROXIMITY_DISTANCE),
            );
            clauses.push(
                SearchClause::new(&self.field, wildcarded, Operator::Or)
                    .with_boost(20.0)
                    .with_proximity(PROXIMITY_DISTANCE),
            );
        } else {
            clauses.push(SearchClause::new(&self.field, exact, Operator::Or).with_boost(100.0));
            clauses.push(SearchClause::new(&self.field, wildcarded, Operator::Or).with_boost(30.0));
        }

        SearchRequest {
            clauses,
            limit: self.limit,
            highlight: self.highlight.clone(),
        }
    }
}

impl Default for BoostedQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sanitize::sanitize;

    fn shape(request: &SearchRequest) -> Vec<(&str, Operator, f32, Option<u32>)> {
        request
            .clauses
            .iter()
            .map(|c| (c.term.as_str(), c.operator, c.boost, c.proximity))
            .collect()
    }

    #[test]
    fn test_multi_token_tiering() {
        let query = sanitize("rust async").unwrap();
        let request = BoostedQueryBuilder::new().build(&query);

        assert_eq!(
            shape(&request),
            vec![
                ("rust async*", Operator::And, 100.0, None),
                ("rust async", Operator::And, 50.0, None),
                ("rust async*", Operator::Or, 10.0, None),
                ("rust async", Operator::Or, 100.0, Some(6)),
                ("rust async*", Operator::Or, 20.0, Some(6)),
            ]
        );
    }

    #[test]
    fn test_single_token_tiering() {
        let query = sanitize("rust").unwrap();
        let request = BoostedQueryBuilder::new().build(&query);

        assert_eq!(
            shape(&request),
            vec![
                ("rust*", Operator::And, 100.0, None),
                ("rust", Operator::Or, 100.0, None),
                ("rust*", Operator::Or, 30.0, None),
            ]
        );
    }

    #[test]
    fn test_request_defaults() {
        let query = sanitize("rust").unwrap();
        let request = BoostedQueryBuilder::new().build(&query);

        assert_eq!(request.limit, DEFAULT_LIMIT);
        assert_eq!(request.highlight.field, "title");
        assert!(request.clauses.iter().all(|c| c.field == "title"));
    }

    #[test]
    fn test_builder_field_and_limit() {
        let query = sanitize("rust async").unwrap();
        let request = BoostedQueryBuilder::new()
            .with_field("body")
            .with_limit(25)
            .build(&query);

        assert_eq!(request.limit, 25);
        assert_eq!(request.highlight.field, "body");
        assert!(request.clauses.iter().all(|c| c.field == "body"));
    }

    #[test]
    fn test_clause_description() {
        let clause = SearchClause::new("title", "rust async", Operator::Or)
            .with_boost(100.0)
            .with_proximity(PROXIMITY_DISTANCE);

        assert_eq!(clause.description(), "title:rust async^100~6");
    }
}
