//! Arena-backed phrase trie.
//!
//! Edges are normalized words; a path from the root spells a registered phrase.
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`], so
//! parent links never form ownership cycles and phrase reconstruction is a
//! plain walk up the arena.

use std::cmp::Ordering;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable index of a node inside one [`PhraseTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors returned by [`PhraseTrie::insert`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    #[error("phrase contains no words")]
    EmptyPhrase,
    #[error("phrase already terminates at node {}", .0.index())]
    DuplicatePhrase(NodeId),
}

/// One node of the trie. The root has depth 0 and empty content.
#[derive(Debug, Clone)]
pub struct TrieNode {
    content: String,
    depth: usize,
    weight: i64,
    terminal: bool,
    ordinal: usize,
    children: FxHashMap<String, NodeId>,
    parent: Option<NodeId>,
}

impl TrieNode {
    fn new(content: String, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            content,
            depth,
            weight: 0,
            terminal: false,
            ordinal: 0,
            children: FxHashMap::default(),
            parent,
        }
    }

    /// The normalized word on the edge leading into this node.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of words from the root, i.e. the phrase length at this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Weight assigned when the node became terminal; 0 otherwise.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Registration order among terminal nodes, starting at 0.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Word-level trie of registered phrases.
#[derive(Debug, Clone)]
pub struct PhraseTrie {
    nodes: Vec<TrieNode>,
    terminals: usize,
}

impl PhraseTrie {
    const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(String::new(), 0, None)],
            terminals: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Borrow a node. Ids are only ever handed out by this trie, and nodes
    /// are never removed, so every id it produced stays valid.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of registered phrases.
    pub fn terminal_count(&self) -> usize {
        self.terminals
    }

    /// Single-step lookup of the child reached from `node` by `key`.
    pub fn child(&self, node: NodeId, key: &str) -> Option<NodeId> {
        self.node(node).children.get(key).copied()
    }

    /// Follow `words` from the root without creating anything.
    pub fn find<S: AsRef<str>>(&self, words: &[S]) -> Option<NodeId> {
        words
            .iter()
            .try_fold(self.root(), |node, word| self.child(node, word.as_ref()))
    }

    /// Register `words` as a phrase carrying `weight`.
    ///
    /// Fails before touching the trie when `words` is empty or when the full
    /// path already ends at a terminal node, so a failed insert leaves no
    /// trace.
    pub fn insert<S: AsRef<str>>(&mut self, words: &[S], weight: i64) -> Result<NodeId, TrieError> {
        if words.is_empty() {
            return Err(TrieError::EmptyPhrase);
        }

        let mut cursor = self.root();
        let mut consumed = 0;
        for word in words {
            match self.child(cursor, word.as_ref()) {
                Some(next) => {
                    cursor = next;
                    consumed += 1;
                }
                None => break,
            }
        }

        if consumed == words.len() && self.node(cursor).terminal {
            return Err(TrieError::DuplicatePhrase(cursor));
        }

        for word in &words[consumed..] {
            let depth = self.node(cursor).depth + 1;
            let id = NodeId(self.nodes.len());
            self.nodes
                .push(TrieNode::new(word.as_ref().to_string(), depth, Some(cursor)));
            self.nodes[cursor.0]
                .children
                .insert(word.as_ref().to_string(), id);
            cursor = id;
        }

        let ordinal = self.terminals;
        let node = &mut self.nodes[cursor.0];
        node.terminal = true;
        node.weight = weight;
        node.ordinal = ordinal;
        self.terminals += 1;
        Ok(cursor)
    }

    /// Rebuild the space-joined word sequence leading to `node`.
    pub fn full_text(&self, node: NodeId) -> String {
        let mut words = Vec::with_capacity(self.node(node).depth);
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let current = self.node(id);
            if current.parent.is_some() {
                words.push(current.content.as_str());
            }
            cursor = current.parent;
        }
        words.reverse();
        words.join(" ")
    }

    /// Ranking used to pick a token's best match: higher weight first, then
    /// the longer phrase, then the earlier registration.
    pub fn compare_rank(&self, a: NodeId, b: NodeId) -> Ordering {
        let (left, right) = (self.node(a), self.node(b));
        left.weight
            .cmp(&right.weight)
            .then(left.depth.cmp(&right.depth))
            .then(right.ordinal.cmp(&left.ordinal))
    }

    /// Depth-first walk from the root. Children are visited in key order.
    /// Returning `false` from `visit` skips that node's subtree.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(NodeId, &TrieNode) -> bool,
    {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !visit(id, node) {
                continue;
            }
            stack.extend(self.sorted_children(id).into_iter().rev());
        }
    }

    /// Indented dump of the whole trie, one node per line.
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        self.walk(|id, node| {
            out.push_str(&"  ".repeat(node.depth));
            if node.parent.is_none() {
                out.push_str("[root]");
            } else {
                out.push_str(&self.full_text(id));
            }
            if node.terminal {
                out.push_str(" [t]");
            }
            out.push('\n');
            true
        });
        out
    }

    fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<(&String, &NodeId)> = self.node(id).children.iter().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        children.into_iter().map(|(_, child)| *child).collect()
    }
}

impl Default for PhraseTrie {
    fn default() -> Self {
        Self::new()
    }
}
