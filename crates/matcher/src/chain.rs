//! Output of one `process` call.
//!
//! Tokens are stored in input order, so "previous" and "next" are just the
//! neighbouring indices. A [`TokenRef`] is a cursor into the chain that reads
//! like a doubly linked list without any reference cycles.

use std::fmt;

use fxhash::FxHashSet;

use crate::phrase::{Match, PhraseRegistry};
use crate::trie::NodeId;

/// A word or separator span plus the phrases covering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    content: String,
    start: usize,
    end: usize,
    ignored: bool,
    matched_by: Vec<NodeId>,
}

impl Token {
    pub(crate) fn new(content: &str, start: usize, end: usize, ignored: bool) -> Self {
        Self {
            content: content.to_string(),
            start,
            end,
            ignored,
            matched_by: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Separators and stop-words are ignored.
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Terminal nodes of every phrase covering this token, in recording order.
    pub fn matched_by(&self) -> &[NodeId] {
        &self.matched_by
    }
}

/// Ordered tokens of one processed text.
#[derive(Debug, Clone)]
pub struct TokenChain<'r> {
    registry: &'r PhraseRegistry,
    tokens: Vec<Token>,
    dedupe: bool,
}

impl<'r> TokenChain<'r> {
    pub(crate) fn with_capacity(registry: &'r PhraseRegistry, capacity: usize, dedupe: bool) -> Self {
        Self {
            registry,
            tokens: Vec::with_capacity(capacity),
            dedupe,
        }
    }

    pub(crate) fn push(&mut self, token: Token) -> usize {
        self.tokens.push(token);
        self.tokens.len() - 1
    }

    /// Back-propagate a completed match ending at token `at`.
    ///
    /// Walks backwards until as many non-ignored tokens as the phrase has
    /// words were visited. Ignored tokens met along the way are covered too,
    /// but do not count towards the phrase length.
    pub(crate) fn record_match(&mut self, at: usize, node: NodeId) {
        let depth = self.registry.trie().node(node).depth();
        let dedupe = self.dedupe;
        let mut recorded = 0;
        let mut cursor = Some(at);
        while let Some(idx) = cursor {
            let token = &mut self.tokens[idx];
            if !(dedupe && token.matched_by.contains(&node)) {
                token.matched_by.push(node);
            }
            if !token.ignored {
                recorded += 1;
            }
            if recorded >= depth {
                return;
            }
            cursor = idx.checked_sub(1);
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token, or `None` for empty input.
    pub fn head(&self) -> Option<TokenRef<'_>> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<TokenRef<'_>> {
        (index < self.tokens.len()).then_some(TokenRef { chain: self, index })
    }

    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| TokenRef { chain: self, index })
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Fraction of non-ignored tokens covered by at least one match.
    pub fn coverage(&self) -> f64 {
        let (words, covered) = self
            .tokens
            .iter()
            .filter(|t| !t.ignored)
            .fold((0usize, 0usize), |(words, covered), t| {
                (words + 1, covered + usize::from(!t.matched_by.is_empty()))
            });
        if words == 0 {
            return 0.0;
        }
        covered as f64 / words as f64
    }

    /// Distinct best matches in order of first appearance.
    pub fn top_matches(&self) -> Vec<Match<'_>> {
        let mut seen = FxHashSet::default();
        self.tokens()
            .filter_map(|t| t.top_match())
            .filter(|m| seen.insert(m.id()))
            .collect()
    }

    /// Number of distinct phrases matched anywhere in the chain.
    pub fn match_count(&self) -> usize {
        self.tokens
            .iter()
            .flat_map(|t| t.matched_by.iter())
            .collect::<FxHashSet<_>>()
            .len()
    }
}

/// Cursor over one token of a [`TokenChain`].
#[derive(Clone, Copy)]
pub struct TokenRef<'c> {
    chain: &'c TokenChain<'c>,
    index: usize,
}

impl<'c> TokenRef<'c> {
    fn token(&self) -> &'c Token {
        &self.chain.tokens[self.index]
    }

    /// Position in the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &'c str {
        &self.token().content
    }

    pub fn start(&self) -> usize {
        self.token().start
    }

    pub fn end(&self) -> usize {
        self.token().end
    }

    pub fn is_ignored(&self) -> bool {
        self.token().ignored
    }

    pub fn next(&self) -> Option<TokenRef<'c>> {
        self.chain.get(self.index + 1)
    }

    pub fn previous(&self) -> Option<TokenRef<'c>> {
        self.index.checked_sub(1).and_then(|i| self.chain.get(i))
    }

    pub fn is_matched(&self) -> bool {
        !self.token().matched_by.is_empty()
    }

    pub fn matches(&self) -> Vec<Match<'c>> {
        let registry = self.chain.registry;
        self.token()
            .matched_by
            .iter()
            .map(|node| Match::new(registry, *node))
            .collect()
    }

    /// Highest weight wins; equal weights go to the longer phrase, and a
    /// full tie goes to the phrase registered first.
    pub fn top_match(&self) -> Option<Match<'c>> {
        self.matches().into_iter().max_by(|a, b| a.rank_cmp(b))
    }
}

impl fmt::Display for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

impl fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRef")
            .field("index", &self.index)
            .field("token", self.token())
            .finish()
    }
}
