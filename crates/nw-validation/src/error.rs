//! Error types for name validation
//!
//! The display strings of [`NameError`] are the messages shown next to the
//! offending form field.

use crate::rules::NameScope;
use nw_state::EntityId;

/// Name rejected by a form rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Blank name
    #[error("{scope} name is required.")]
    Empty {
        /// Rule that rejected the name
        scope: NameScope,
    },

    /// Name contains a reserved character
    #[error("{scope} name cannot contain '{character}'.")]
    ForbiddenCharacter {
        /// Rule that rejected the name
        scope: NameScope,
        /// Offending character
        character: char,
    },

    /// Name already used within the rule's scope
    #[error("{scope} name is not unique.")]
    Taken {
        /// Rule that rejected the name
        scope: NameScope,
        /// Rejected name
        name: String,
        /// Record already holding the name
        holder: EntityId,
    },
}

impl NameError {
    /// Rule that rejected the name
    #[inline]
    #[must_use]
    pub fn scope(&self) -> NameScope {
        match self {
            Self::Empty { scope }
            | Self::ForbiddenCharacter { scope, .. }
            | Self::Taken { scope, .. } => *scope,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// File that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::ValidationConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
