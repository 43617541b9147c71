//! Phrase-spotting canonical text layer.
//!
//! This crate turns raw text into the two things the matcher needs: an ordered
//! sequence of word and separator spans, and a lookup key for every word.
//!
//! ## What we do
//!
//! - Tokenization into maximal word/separator runs with byte offsets
//! - Pluggable word-character classification ([`WordClassifier`])
//! - Key normalization: optional NFKC, lowercasing, then stemming
//! - Pluggable stemming ([`Stemmer`]), identity by default
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The same text, config,
//! classifier and stemmer always give the same spans and keys.

mod config;
mod error;
mod normalize;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::normalize::{IdentityStemmer, Normalizer, Stemmer};
pub use crate::token::{tokenize, tokenize_with, words_with, Span, WordClassifier, WordFinder};
