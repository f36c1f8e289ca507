//! Entity kinds and their designated name fields

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of entity configured through the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Monitored blockchain
    Chain,

    /// Blockchain node data source
    Node,

    /// GitHub repository data source
    Repository,

    /// System (host metrics) data source
    System,

    /// DockerHub image data source
    DockerHub,

    /// Alert channel (Telegram, Twilio, e-mail, PagerDuty, Opsgenie)
    Channel,

    /// Installer user
    User,

    /// KMS configuration
    Kms,
}

impl EntityKind {
    /// Number of kinds
    pub const COUNT: usize = 8;

    /// All kinds in declaration order
    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Chain,
        EntityKind::Node,
        EntityKind::Repository,
        EntityKind::System,
        EntityKind::DockerHub,
        EntityKind::Channel,
        EntityKind::User,
        EntityKind::Kms,
    ];

    /// Kinds whose records hang off a chain through `parent_id`
    pub const CHAIN_CHILDREN: [EntityKind; 5] = [
        EntityKind::Node,
        EntityKind::Repository,
        EntityKind::System,
        EntityKind::DockerHub,
        EntityKind::Kms,
    ];

    /// Data-source kinds sharing one name scope per chain
    pub const DATA_SOURCES: [EntityKind; 4] = [
        EntityKind::Node,
        EntityKind::Repository,
        EntityKind::System,
        EntityKind::DockerHub,
    ];

    /// Field holding the record's unique name
    #[inline]
    #[must_use]
    pub fn name_field(self) -> &'static str {
        match self {
            EntityKind::Chain => "chain_name",
            EntityKind::Node | EntityKind::System | EntityKind::DockerHub => "name",
            EntityKind::Repository => "repo_name",
            EntityKind::Channel => "channel_name",
            EntityKind::User => "username",
            EntityKind::Kms => "kms_name",
        }
    }

    /// Key of the kind's collection in the serialized state
    #[inline]
    #[must_use]
    pub fn collection_key(self) -> &'static str {
        match self {
            EntityKind::Chain => "chains",
            EntityKind::Node => "nodes",
            EntityKind::Repository => "repositories",
            EntityKind::System => "systems",
            EntityKind::DockerHub => "docker_hubs",
            EntityKind::Channel => "channels",
            EntityKind::User => "users",
            EntityKind::Kms => "kms",
        }
    }

    /// Check if records of this kind belong to a chain
    #[inline]
    #[must_use]
    pub fn has_parent_chain(self) -> bool {
        Self::CHAIN_CHILDREN.contains(&self)
    }

    /// Check if this kind is a monitored data source
    #[inline]
    #[must_use]
    pub fn is_data_source(self) -> bool {
        Self::DATA_SOURCES.contains(&self)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            EntityKind::Chain => "chain",
            EntityKind::Node => "node",
            EntityKind::Repository => "repository",
            EntityKind::System => "system",
            EntityKind::DockerHub => "docker_hub",
            EntityKind::Channel => "channel",
            EntityKind::User => "user",
            EntityKind::Kms => "kms",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.collection_key() == s)
            .ok_or_else(|| StateError::UnknownKind(s.to_string()))
    }
}
