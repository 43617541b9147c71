//! Configuration types for key normalization.
//!
//! This module defines [`NormalizeConfig`], which controls how a word span is
//! turned into the lookup key shared by phrase registration, stop-word
//! registration and matching.
//!
//! # Versioning
//!
//! Any change to how keys are produced must be accompanied by a version bump.
//! Keys produced under different versions are not comparable, so an engine
//! should never mix registrations made under one version with processing
//! under another.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.normalize_unicode);
//! assert!(config.lowercase);
//! ```
//!
//! ## Folding Compatibility Forms
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig {
//!     normalize_unicode: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the key normalizer.
///
/// `NormalizeConfig` is cheap to clone and serializable so it can be embedded
/// in higher-level configuration files.
///
/// # Fields
///
/// - `version`: Semantic version for tracking behavior changes
/// - `normalize_unicode`: Apply Unicode NFKC normalization to keys
/// - `lowercase`: Apply locale-free Unicode lowercasing to keys
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization behavior.
    ///
    /// Must be >= 1. Version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before lowercasing.
    ///
    /// Only lookup keys are affected; token content handed back to callers
    /// is always the literal input text.
    ///
    /// ```text
    /// "Cafe" + U+0301 → "café"
    /// "ﬁne" (U+FB01 ligature) → "fine"
    /// ```
    ///
    /// # Default
    ///
    /// `false`, so a key is exactly `stem(lowercase(word))`.
    pub normalize_unicode: bool,

    /// If true, lowercase the word before handing it to the stemmer.
    ///
    /// Lowercasing can expand a character into several (e.g. "İ"), which is
    /// fine because keys are never mapped back onto the input.
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,
}

impl NormalizeConfig {
    /// Create a new configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC folding of keys.
    pub fn with_unicode_normalization(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Enable or disable lowercasing of keys.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            lowercase: true,
        }
    }
}
