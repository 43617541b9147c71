use std::cmp::Ordering;
use std::fmt;

use fxhash::FxHashMap;

use crate::trie::{NodeId, PhraseTrie, TrieError};

/// Phrase trie plus the caller's original text for every registration.
#[derive(Debug, Clone, Default)]
pub struct PhraseRegistry {
    trie: PhraseTrie,
    originals: FxHashMap<NodeId, String>,
}

impl PhraseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trie(&self) -> &PhraseTrie {
        &self.trie
    }

    /// Insert normalized `words` and remember `original` for diagnostics.
    pub(crate) fn register<S: AsRef<str>>(
        &mut self,
        words: &[S],
        weight: i64,
        original: &str,
    ) -> Result<NodeId, TrieError> {
        let node = self.trie.insert(words, weight)?;
        self.originals.insert(node, original.to_string());
        Ok(node)
    }

    /// Text originally passed when the phrase ending at `node` was registered.
    pub fn original(&self, node: NodeId) -> Option<&str> {
        self.originals.get(&node).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// View of a registered phrase, if `node` is terminal.
    pub fn get(&self, node: NodeId) -> Option<Match<'_>> {
        self.trie
            .get(node)
            .filter(|n| n.is_terminal())
            .map(|_| Match::new(self, node))
    }
}

/// A registered phrase, as seen from a match on some token.
#[derive(Clone, Copy)]
pub struct Match<'r> {
    registry: &'r PhraseRegistry,
    node: NodeId,
}

impl<'r> Match<'r> {
    pub(crate) fn new(registry: &'r PhraseRegistry, node: NodeId) -> Self {
        Self { registry, node }
    }

    pub fn id(&self) -> NodeId {
        self.node
    }

    /// Number of non-ignored words in the phrase.
    pub fn size(&self) -> usize {
        self.registry.trie.node(self.node).depth()
    }

    pub fn weight(&self) -> i64 {
        self.registry.trie.node(self.node).weight()
    }

    /// Normalized words of the phrase, space-joined.
    pub fn text(&self) -> String {
        self.registry.trie.full_text(self.node)
    }

    /// The caller's unnormalized registration text.
    pub fn original(&self) -> Option<&'r str> {
        self.registry.original(self.node)
    }

    /// Best-match ordering; the greater match wins.
    pub fn rank_cmp(&self, other: &Match<'_>) -> Ordering {
        self.registry.trie.compare_rank(self.node, other.node)
    }
}

impl PartialEq for Match<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && std::ptr::eq(self.registry, other.registry)
    }
}

impl Eq for Match<'_> {}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("node", &self.node)
            .field("text", &self.text())
            .field("size", &self.size())
            .field("weight", &self.weight())
            .finish()
    }
}
