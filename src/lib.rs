//! # Gazette
//!
//! The relevance, boosting, and highlighting layer that fronts a full-text
//! search backend for an article reader.
//!
//! ## Features
//!
//! - Deterministic query sanitization with a trailing-wildcard policy
//! - Tiered, boosted query construction keyed on token count
//! - Reconstruction of backend-delimited highlight spans into
//!   prefix-verified display highlights
//! - Standalone trie-based longest-prefix-match content highlighting
//! - Multi-metric fuzzy suggestion ranking with bounded top-k selection
//!
//! The search index itself is an external collaborator reached through
//! [`backend::SearchBackend`].

pub mod backend;
pub mod error;
pub mod highlight;
pub mod query;
pub mod search;
pub mod suggest;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
