use std::sync::Arc;
use std::time::Instant;

use canonical::{tokenize_with, IdentityStemmer, Normalizer, Stemmer, WordClassifier, WordFinder};
use fxhash::FxHashSet;
use tracing::{debug, warn, Level};

use crate::chain::{Token, TokenChain};
use crate::metrics::metrics_recorder;
use crate::phrase::{Match, PhraseRegistry};
use crate::trie::{NodeId, TrieError};
use crate::types::{MatchConfig, MatchError};


/// Phrase-spotting engine.
///
/// Holds the process-lifetime state: registered phrases, stop-words, the
/// normalizer and the word classifier. Registration needs `&mut self`;
/// [`process`](Engine::process) only reads, so a registered engine can be
/// shared across threads behind an `Arc` (or an `RwLock` if registration
/// continues while processing).
pub struct Engine {
    config: MatchConfig,
    registry: PhraseRegistry,
    ignores: FxHashSet<String>,
    normalizer: Normalizer,
    classifier: Arc<dyn WordClassifier>,
}

impl Engine {
    /// Engine with the default configuration and [`WordFinder`] tokenization.
    pub fn new<S>(stemmer: S) -> Self
    where
        S: Stemmer + 'static,
    {
        Self::with_classifier(stemmer, WordFinder)
    }

    /// Engine with the default configuration and a custom word classifier.
    pub fn with_classifier<S, C>(stemmer: S, classifier: C) -> Self
    where
        S: Stemmer + 'static,
        C: WordClassifier + 'static,
    {
        Self {
            config: MatchConfig::default(),
            registry: PhraseRegistry::new(),
            ignores: FxHashSet::default(),
            normalizer: Normalizer::with_stemmer(stemmer),
            classifier: Arc::new(classifier),
        }
    }

    /// Engine with explicit configuration. Fails when `config` is invalid.
    pub fn with_config<S, C>(config: MatchConfig, stemmer: S, classifier: C) -> Result<Self, MatchError>
    where
        S: Stemmer + 'static,
        C: WordClassifier + 'static,
    {
        config.validate()?;
        let normalizer = Normalizer::new(config.normalize.clone(), Arc::new(stemmer))?;
        Ok(Self {
            config,
            registry: PhraseRegistry::new(),
            ignores: FxHashSet::default(),
            normalizer,
            classifier: Arc::new(classifier),
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &PhraseRegistry {
        &self.registry
    }

    /// Register a stop-word. It must be exactly one word.
    pub fn add_ignore(&mut self, word: &str) -> Result<(), MatchError> {
        let result = self.add_ignore_inner(word);
        match &result {
            Ok(()) => debug!(word, ignore_count = self.ignores.len(), "ignore_registered"),
            Err(err) => warn!(word, error = %err, "ignore_rejected"),
        }
        result
    }

    fn add_ignore_inner(&mut self, word: &str) -> Result<(), MatchError> {
        let words = self.words(word);
        let key = match words.as_slice() {
            [] => return Err(MatchError::EmptyAfterSanitize(word.to_string())),
            [single] => self.normalizer.normalize(single),
            _ => return Err(MatchError::NotSingleWord(word.to_string())),
        };
        if !self.ignores.insert(key) {
            return Err(MatchError::DuplicateIgnore(word.to_string()));
        }
        Ok(())
    }

    /// Register a phrase with its weight and return the id of its terminal
    /// node. Stop-words inside `text` are dropped before insertion.
    pub fn add_phrase(&mut self, text: &str, weight: i64) -> Result<NodeId, MatchError> {
        let result = self.add_phrase_inner(text, weight);
        match &result {
            Ok(node) => debug!(
                phrase = text,
                weight,
                node = node.index(),
                phrase_count = self.registry.len(),
                "phrase_registered"
            ),
            Err(err) => warn!(phrase = text, weight, error = %err, "phrase_rejected"),
        }
        result
    }

    fn add_phrase_inner(&mut self, text: &str, weight: i64) -> Result<NodeId, MatchError> {
        let keys = self.sanitize(text);
        match self.registry.register(keys.as_slice(), weight, text) {
            Ok(node) => Ok(node),
            Err(TrieError::EmptyPhrase) => Err(MatchError::EmptyAfterSanitize(text.to_string())),
            Err(TrieError::DuplicatePhrase(node)) => Err(MatchError::DuplicatePhrase {
                original: self.registry.original(node).unwrap_or_default().to_string(),
                needle: text.to_string(),
            }),
        }
    }

    /// Tokenize `text` and report every registered phrase it contains.
    ///
    /// Never fails: empty input yields an empty chain.
    pub fn process(&self, text: &str) -> TokenChain<'_> {
        let start = Instant::now();
        let process_span = tracing::span!(Level::DEBUG, "matcher.process", input_len = text.len());
        let _guard = process_span.enter();

        let spans = tokenize_with(text, self.classifier.as_ref());
        let mut chain =
            TokenChain::with_capacity(&self.registry, spans.len(), self.config.dedupe_matches);
        let trie = self.registry.trie();
        let root = trie.root();

        // Cursors other than the root; the root is always active.
        let mut frontier: Vec<NodeId> = Vec::new();
        let mut next: Vec<NodeId> = Vec::new();
        let mut match_count = 0usize;

        for span in spans {
            let content = span.slice(text);
            let key = span
                .is_word
                .then(|| self.normalizer.normalize(content))
                .filter(|key| !self.ignores.contains(key));
            let index = chain.push(Token::new(content, span.start, span.end, key.is_none()));
            let Some(key) = key else {
                continue;
            };

            next.clear();
            for cursor in std::iter::once(root).chain(frontier.iter().copied()) {
                let Some(child) = trie.child(cursor, &key) else {
                    continue;
                };
                let node = trie.node(child);
                if node.is_terminal() {
                    chain.record_match(index, child);
                    match_count += 1;
                }
                // A terminal node may still prefix a longer phrase.
                if node.has_children() && !next.contains(&child) {
                    next.push(child);
                }
            }
            std::mem::swap(&mut frontier, &mut next);
        }

        let elapsed = start.elapsed();
        debug!(
            token_count = chain.len(),
            match_count,
            elapsed_micros = elapsed.as_micros(),
            "process_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_process(elapsed, chain.len(), match_count);
        }
        chain
    }

    /// View of a registered phrase by the id [`add_phrase`](Engine::add_phrase) returned.
    pub fn phrase(&self, node: NodeId) -> Option<Match<'_>> {
        self.registry.get(node)
    }

    pub fn phrase_count(&self) -> usize {
        self.registry.len()
    }

    pub fn ignore_count(&self) -> usize {
        self.ignores.len()
    }

    /// Whether `word` normalizes to a registered stop-word.
    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignores.contains(&self.normalizer.normalize(word))
    }

    /// Normalized keys of `text` with stop-words removed.
    pub fn sanitize(&self, text: &str) -> Vec<String> {
        self.words(text)
            .into_iter()
            .map(|word| self.normalizer.normalize(word))
            .filter(|key| !self.ignores.contains(key))
            .collect()
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        canonical::words_with(text, self.classifier.as_ref()).collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(IdentityStemmer)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("phrases", &self.registry.len())
            .field("ignores", &self.ignores.len())
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}
