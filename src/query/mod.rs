//! Query sanitization and boosted request construction.

pub mod builder;
pub mod sanitize;

pub use self::builder::{BoostedQueryBuilder, SearchClause, SearchRequest};
pub use self::sanitize::{sanitize, SanitizedQuery, WILDCARD};
