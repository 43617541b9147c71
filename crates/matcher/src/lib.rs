//! # Phrase Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` spots previously registered multi-word phrases inside arbitrary
//! text, one document at a time. Stop-words are transparent, and words are
//! compared by their normalized key (see the `canonical` crate), so case and
//! stemming differences between a phrase and the text do not matter.
//!
//! ## Core Types
//!
//! - [`Engine`]: owns the phrase trie and the stop-word set; registers phrases
//!   and stop-words, then processes text.
//! - [`PhraseTrie`]: arena trie whose edges are normalized words.
//! - [`TokenChain`] / [`TokenRef`]: the output of one [`Engine::process`]
//!   call, walkable like a linked list.
//! - [`Match`]: a registered phrase as seen from a token, with its size,
//!   weight and reconstructed text.
//! - [`MatchConfig`] and [`MatchError`]: configuration and registration
//!   failures.
//!
//! ## How matching works
//!
//! The engine walks the token stream once, keeping a set of active trie
//! cursors. The root is always active so a phrase can start at any word;
//! every other cursor either advances by exactly the observed word or dies.
//! When a cursor reaches a terminal node, the match is back-propagated onto
//! every token it spans, including ignored tokens inside it.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::IdentityStemmer;
//! use matcher::Engine;
//!
//! let mut engine = Engine::new(IdentityStemmer);
//! engine.add_ignore("whole").unwrap();
//! engine.add_phrase("rice flour", 1).unwrap();
//!
//! let chain = engine.process("Rice whole flour");
//! let mut token = chain.head();
//! while let Some(t) = token {
//!     assert_eq!(t.top_match().map(|m| m.to_string()), Some("rice flour".into()));
//!     token = t.next();
//! }
//! ```
//!
//! ## Observability
//!
//! Registration and processing emit `tracing` events. Install a
//! [`ProcessMetrics`] implementation via [`set_process_metrics`] to record
//! per-call latency, token counts and match counts.

pub mod chain;
pub mod engine;
pub mod metrics;
pub mod phrase;
pub mod trie;
pub mod types;

pub use crate::chain::{Token, TokenChain, TokenRef};
pub use crate::engine::Engine;
pub use crate::metrics::{set_process_metrics, ProcessMetrics};
pub use crate::phrase::{Match, PhraseRegistry};
pub use crate::trie::{NodeId, PhraseTrie, TrieError, TrieNode};
pub use crate::types::{MatchConfig, MatchError};
