//! Workspace umbrella crate for phrasespot.
//!
//! This crate stitches together key normalization (`canonical`) and phrase
//! matching (`matcher`) so callers can configure an engine from one YAML
//! file and work against a single API entry point.

mod config;

pub use canonical::{
    tokenize, tokenize_with, words_with, CanonicalError, IdentityStemmer, NormalizeConfig,
    Normalizer, Span, Stemmer, WordClassifier, WordFinder,
};
pub use config::{CanonicalYamlConfig, ConfigLoadError, MatchYamlConfig, PhraseSpotConfig};
pub use matcher::{
    set_process_metrics, Engine, Match, MatchConfig, MatchError, NodeId, PhraseRegistry,
    PhraseTrie, ProcessMetrics, Token, TokenChain, TokenRef, TrieError, TrieNode,
};

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Errors raised while building an engine from a configuration file.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration load failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("engine construction failure: {0}")]
    Engine(#[from] MatchError),
}

/// Build an engine from a parsed configuration using the default
/// [`WordFinder`] tokenization.
pub fn engine_from_config<S>(config: &PhraseSpotConfig, stemmer: S) -> Result<Engine, MatchError>
where
    S: Stemmer + 'static,
{
    engine_from_config_with_classifier(config, stemmer, WordFinder)
}

/// Build an engine from a parsed configuration with a custom word classifier.
pub fn engine_from_config_with_classifier<S, C>(
    config: &PhraseSpotConfig,
    stemmer: S,
    classifier: C,
) -> Result<Engine, MatchError>
where
    S: Stemmer + 'static,
    C: WordClassifier + 'static,
{
    let engine = Engine::with_config(config.to_match_config(), stemmer, classifier)?;
    info!(
        name = config.name.as_deref().unwrap_or("unnamed"),
        lowercase = config.canonical.lowercase,
        normalize_unicode = config.canonical.normalize_unicode,
        dedupe_matches = config.matcher.dedupe_matches,
        "engine_configured"
    );
    Ok(engine)
}

/// Load a YAML configuration file and build an engine from it.
pub fn engine_from_file<P, S>(path: P, stemmer: S) -> Result<Engine, SetupError>
where
    P: AsRef<Path>,
    S: Stemmer + 'static,
{
    let config = PhraseSpotConfig::from_file(path)?;
    Ok(engine_from_config(&config, stemmer)?)
}
