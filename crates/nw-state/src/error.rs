//! Error types for installer state

use crate::id::EntityId;
use crate::kind::EntityKind;

/// State mutation and loading errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Record inserted under an id already present
    #[error("duplicate id: {0}")]
    DuplicateId(EntityId),

    /// Id not present in the collection
    #[error("unknown id: {0}")]
    UnknownId(EntityId),

    /// Id listed in `allIds` with no record in `byId`
    #[error("id '{0}' is listed but has no record")]
    OrphanId(EntityId),

    /// Record in `byId` missing from `allIds`
    #[error("record '{0}' is not listed in allIds")]
    UnlistedRecord(EntityId),

    /// Chain-owned record without a `parent_id`
    #[error("{kind} '{id}' has no parent chain")]
    MissingParent {
        /// Kind of the record
        kind: EntityKind,
        /// Record id
        id: EntityId,
    },

    /// Chain-owned record whose `parent_id` names no chain
    #[error("{kind} '{id}' belongs to unknown chain '{parent}'")]
    UnknownParent {
        /// Kind of the record
        kind: EntityKind,
        /// Record id
        id: EntityId,
        /// The `parent_id` value
        parent: String,
    },

    /// Unrecognized entity kind name
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// Error inside one collection of the state
    #[error("{kind} collection: {source}")]
    InCollection {
        /// Collection the error was found in
        kind: EntityKind,
        /// Underlying error
        #[source]
        source: Box<StateError>,
    },
}

impl StateError {
    /// Attach the collection kind to an error
    #[inline]
    #[must_use]
    pub fn in_collection(self, kind: EntityKind) -> Self {
        Self::InCollection {
            kind,
            source: Box::new(self),
        }
    }
}
