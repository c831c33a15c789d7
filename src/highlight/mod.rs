//! Highlighting: backend span reconstruction and standalone content
//! highlighting over a prefix trie.

pub mod content;
pub mod reconstruct;
pub mod trie;

pub use self::content::{ContentHighlighter, HighlightTags, ELLIPSIS};
pub use self::reconstruct::SpanReconstructor;
pub use self::trie::Trie;
