use canonical::{CanonicalError, NormalizeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a phrase-spotting [`Engine`](crate::Engine).
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    pub version: u32,
    /// How words are turned into lookup keys.
    #[serde(default)]
    pub normalize: NormalizeConfig,
    /// Keep each token's match list free of repeated phrases.
    ///
    /// Overlapping occurrences of one phrase (e.g. "a a" in "a a a") would
    /// otherwise record the same phrase twice on the shared token.
    #[serde(default = "MatchConfig::default_dedupe_matches")]
    pub dedupe_matches: bool,
}

impl MatchConfig {
    pub(crate) fn default_dedupe_matches() -> bool {
        true
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_dedupe_matches(mut self, dedupe_matches: bool) -> Self {
        self.dedupe_matches = dedupe_matches;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "match config version must be >= 1".into(),
            ));
        }
        self.normalize.validate()?;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize: NormalizeConfig::default(),
            dedupe_matches: Self::default_dedupe_matches(),
        }
    }
}

/// Registration and configuration failures.
///
/// Processing never fails; every variant is raised while configuring the
/// engine or registering phrases and stop-words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("ignore not a single word: {0:?}")]
    NotSingleWord(String),
    #[error("duplicate ignore: {0:?}")]
    DuplicateIgnore(String),
    #[error("only consists of ignores: {0:?}")]
    EmptyAfterSanitize(String),
    #[error("duplicate of {original:?}: {needle:?}")]
    DuplicatePhrase { original: String, needle: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("canonical configuration: {0}")]
    Canonical(#[from] CanonicalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = MatchConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn nested_normalize_config_checked() {
        let cfg = MatchConfig::new().with_normalize(NormalizeConfig {
            version: 0,
            ..Default::default()
        });
        assert!(matches!(
            cfg.validate(),
            Err(MatchError::Canonical(CanonicalError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: MatchConfig = serde_json::from_str(r#"{"version": 2}"#).expect("parse");
        assert_eq!(cfg.version, 2);
        assert!(cfg.dedupe_matches);
        assert_eq!(cfg.normalize, NormalizeConfig::default());
    }

    #[test]
    fn duplicate_phrase_message_quotes_both_texts() {
        let err = MatchError::DuplicatePhrase {
            original: "rice flour".into(),
            needle: "Rice  Flour".into(),
        };
        assert_eq!(err.to_string(), r#"duplicate of "rice flour": "Rice  Flour""#);
    }
}
