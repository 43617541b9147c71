use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::CanonicalError;

/// Reduces a word to its stem.
///
/// Implementations must be total: a word that cannot be stemmed comes back
/// unchanged. Any `Fn(&str) -> String` closure implements this trait.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Stemmer that leaves every word as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Turns word spans into comparable lookup keys: `stem(lowercase(word))`.
///
/// The same normalizer must be used for registration and for matching,
/// otherwise keys from the two sides are not comparable.
#[derive(Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
    stemmer: Arc<dyn Stemmer>,
}

impl Normalizer {
    /// Build a normalizer after validating `config`.
    pub fn new(config: NormalizeConfig, stemmer: Arc<dyn Stemmer>) -> Result<Self, CanonicalError> {
        config.validate()?;
        Ok(Self { config, stemmer })
    }

    /// Default configuration around the given stemmer.
    pub fn with_stemmer<S>(stemmer: S) -> Self
    where
        S: Stemmer + 'static,
    {
        Self {
            config: NormalizeConfig::default(),
            stemmer: Arc::new(stemmer),
        }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize a single word into its key.
    pub fn normalize(&self, word: &str) -> String {
        let folded: Cow<str> = if self.config.normalize_unicode {
            Cow::Owned(word.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(word)
        };
        let cased: Cow<str> = if self.config.lowercase {
            Cow::Owned(folded.to_lowercase())
        } else {
            folded
        };
        self.stemmer.stem(cased.as_ref())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_stemmer(IdentityStemmer)
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
