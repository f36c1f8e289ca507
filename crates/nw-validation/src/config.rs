//! Validation configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! forbidden_characters = ["[", "]"]
//! missing_field_policy = "null_only"
//! ```

use crate::characters::FORBIDDEN_CHARACTERS;
use crate::error::ConfigError;
use crate::missing::MissingFieldPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the form rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Characters rejected anywhere in a name
    pub forbidden_characters: Vec<char>,

    /// What counts as a missing required field
    pub missing_field_policy: MissingFieldPolicy,
}

impl ValidationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With forbidden characters
    #[inline]
    #[must_use]
    pub fn with_forbidden_characters(mut self, characters: impl IntoIterator<Item = char>) -> Self {
        self.forbidden_characters = characters.into_iter().collect();
        self
    }

    /// With missing-field policy
    #[inline]
    #[must_use]
    pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field_policy = policy;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns `Parse` on malformed TOML or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Parse` if it is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded validation config");
        Ok(config)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            forbidden_characters: FORBIDDEN_CHARACTERS.to_vec(),
            missing_field_policy: MissingFieldPolicy::default(),
        }
    }
}
