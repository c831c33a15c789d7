//! High-level search orchestration.

pub mod engine;

pub use self::engine::{ArticleHit, SearchConfig, SearchEngine};
