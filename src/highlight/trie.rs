//! Fixed-radix prefix trie for longest-match lookups.
//!
//! One dense child slot per lowercase letter and digit (36 total). The trie
//! is built fresh per term set, filled during construction, and read-only
//! afterwards, so it needs no locking.

/// Child slots per node: lowercase letters map to 0–25, digits to 26–35.
const ALPHABET_SIZE: usize = 36;

/// Map a character to its child slot, lowercasing letters on the way.
/// Characters outside the alphabet have no slot.
fn char_slot(ch: char) -> Option<usize> {
    match ch.to_ascii_lowercase() {
        c @ 'a'..='z' => Some(c as usize - 'a' as usize),
        c @ '0'..='9' => Some(c as usize - '0' as usize + 26),
        _ => None,
    }
}

#[derive(Debug)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: std::array::from_fn(|_| None),
            is_word: false,
        }
    }
}

/// A prefix trie over lowercase alphanumeric terms.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Build a trie from every alphanumeric token in `source`.
    ///
    /// Tokens are maximal runs of ASCII letters/digits; all other
    /// characters separate tokens and are discarded.
    pub fn from_terms(source: &str) -> Self {
        let mut trie = Trie::new();
        for token in source.split(|c: char| !c.is_ascii_alphanumeric()) {
            if !token.is_empty() {
                trie.insert(token);
            }
        }
        trie
    }

    /// Insert a word, creating one node per character.
    ///
    /// A character outside the alphabet ends the insertion without marking
    /// a word, so a partial path can never produce a spurious match.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            let Some(slot) = char_slot(ch) else {
                return;
            };
            node = node.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.is_word = true;
    }

    /// Length of the longest prefix of `input` that is itself a complete
    /// inserted word, or 0 if no such prefix exists.
    ///
    /// A character outside the alphabet terminates the walk immediately,
    /// returning the best length found so far.
    pub fn longest_match(&self, input: &str) -> usize {
        let mut node = &self.root;
        let mut best = 0;

        for (walked, ch) in input.chars().enumerate() {
            let Some(slot) = char_slot(ch) else {
                break;
            };
            match &node.children[slot] {
                Some(child) => {
                    node = child;
                    if node.is_word {
                        best = walked + 1;
                    }
                }
                None => break,
            }
        }

        best
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
