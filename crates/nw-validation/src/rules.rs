//! Form-level name rules
//!
//! Each rule fixes the set of collections a name must be unique in:
//!
//! | rule    | unique across                                          |
//! |---------|--------------------------------------------------------|
//! | source  | the chain's nodes, repositories, systems, DockerHub    |
//! | channel | all alert channels                                     |
//! | chain   | all chains                                             |
//! | user    | all installer users                                    |
//! | kms     | the chain's KMS configs                                |
//!
//! Checks run in order: empty, forbidden character, uniqueness.

use crate::characters::first_forbidden_character;
use crate::config::ValidationConfig;
use crate::error::NameError;
use crate::missing::find_missing_required_fields;
use crate::uniqueness::find_name_collision;
use nw_state::{EntityKind, InstallerState, NameSource, Record};

/// Name rule a candidate is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameScope {
    /// Data source of one chain
    Source,

    /// Alert channel
    Channel,

    /// Chain
    Chain,

    /// Installer user
    User,

    /// KMS configuration of one chain
    Kms,
}

impl NameScope {
    /// Label used in user-facing messages
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NameScope::Source => "Source",
            NameScope::Channel => "Channel",
            NameScope::Chain => "Chain",
            NameScope::User => "User",
            NameScope::Kms => "KMS",
        }
    }
}

impl std::fmt::Display for NameScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Applies the name rules with a given configuration
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    config: ValidationConfig,
}

impl NameValidator {
    /// Create validator with configuration
    #[inline]
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check a name against arbitrary sources
    ///
    /// # Errors
    /// - `Empty` if `candidate` is the empty string
    /// - `ForbiddenCharacter` if it contains a configured character
    /// - `Taken` if any source already uses it
    pub fn check(
        &self,
        scope: NameScope,
        candidate: &str,
        sources: &[&dyn NameSource],
    ) -> Result<(), NameError> {
        let result = self.check_inner(scope, candidate, sources);
        if let Err(ref e) = result {
            tracing::debug!(%scope, candidate, error = %e, "name rejected");
        }
        result
    }

    fn check_inner(
        &self,
        scope: NameScope,
        candidate: &str,
        sources: &[&dyn NameSource],
    ) -> Result<(), NameError> {
        if candidate.is_empty() {
            return Err(NameError::Empty { scope });
        }

        if let Some(character) =
            first_forbidden_character(candidate, &self.config.forbidden_characters)
        {
            return Err(NameError::ForbiddenCharacter { scope, character });
        }

        if let Some(collision) = find_name_collision(candidate, sources) {
            return Err(NameError::Taken {
                scope,
                name: candidate.to_string(),
                holder: collision.id,
            });
        }

        Ok(())
    }

    /// Data-source name, unique within one chain
    ///
    /// # Errors
    /// See [`Self::check`]
    pub fn check_source_name(
        &self,
        state: &InstallerState,
        chain_id: &str,
        candidate: &str,
    ) -> Result<(), NameError> {
        let [nodes, repos, systems, hubs] = state.sources_of(chain_id);
        self.check(NameScope::Source, candidate, &[&nodes, &repos, &systems, &hubs])
    }

    /// Channel name, unique across all channels
    ///
    /// # Errors
    /// See [`Self::check`]
    pub fn check_channel_name(
        &self,
        state: &InstallerState,
        candidate: &str,
    ) -> Result<(), NameError> {
        self.check(
            NameScope::Channel,
            candidate,
            &[state.collection(EntityKind::Channel)],
        )
    }

    /// Chain name, unique across all chains
    ///
    /// # Errors
    /// See [`Self::check`]
    pub fn check_chain_name(
        &self,
        state: &InstallerState,
        candidate: &str,
    ) -> Result<(), NameError> {
        self.check(
            NameScope::Chain,
            candidate,
            &[state.collection(EntityKind::Chain)],
        )
    }

    /// Installer user name, unique across all users
    ///
    /// # Errors
    /// See [`Self::check`]
    pub fn check_user_name(
        &self,
        state: &InstallerState,
        candidate: &str,
    ) -> Result<(), NameError> {
        self.check(NameScope::User, candidate, &[state.collection(EntityKind::User)])
    }

    /// KMS config name, unique within one chain
    ///
    /// # Errors
    /// See [`Self::check`]
    pub fn check_kms_name(
        &self,
        state: &InstallerState,
        chain_id: &str,
        candidate: &str,
    ) -> Result<(), NameError> {
        let kms = state.scoped(EntityKind::Kms, chain_id);
        self.check(NameScope::Kms, candidate, &[&kms])
    }

    /// Missing fields of a record under the configured policy
    #[inline]
    #[must_use]
    pub fn missing_fields(&self, record: &Record) -> Vec<String> {
        find_missing_required_fields(record, self.config.missing_field_policy)
    }
}

/// [`NameValidator::check_source_name`] with default configuration
///
/// # Errors
/// See [`NameValidator::check`]
pub fn check_source_name(
    state: &InstallerState,
    chain_id: &str,
    candidate: &str,
) -> Result<(), NameError> {
    NameValidator::default().check_source_name(state, chain_id, candidate)
}

/// [`NameValidator::check_channel_name`] with default configuration
///
/// # Errors
/// See [`NameValidator::check`]
pub fn check_channel_name(state: &InstallerState, candidate: &str) -> Result<(), NameError> {
    NameValidator::default().check_channel_name(state, candidate)
}

/// [`NameValidator::check_chain_name`] with default configuration
///
/// # Errors
/// See [`NameValidator::check`]
pub fn check_chain_name(state: &InstallerState, candidate: &str) -> Result<(), NameError> {
    NameValidator::default().check_chain_name(state, candidate)
}

/// [`NameValidator::check_user_name`] with default configuration
///
/// # Errors
/// See [`NameValidator::check`]
pub fn check_user_name(state: &InstallerState, candidate: &str) -> Result<(), NameError> {
    NameValidator::default().check_user_name(state, candidate)
}

/// [`NameValidator::check_kms_name`] with default configuration
///
/// # Errors
/// See [`NameValidator::check`]
pub fn check_kms_name(
    state: &InstallerState,
    chain_id: &str,
    candidate: &str,
) -> Result<(), NameError> {
    NameValidator::default().check_kms_name(state, chain_id, candidate)
}
