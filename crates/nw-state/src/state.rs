//! Installer state container
//!
//! Holds one [`NamedCollection`] per [`EntityKind`] and keeps the links
//! between them consistent when records are removed:
//! - removing a chain removes its data sources and KMS configs
//! - removing a channel detaches it from every chain

use crate::collection::{CollectionParts, NamedCollection};
use crate::error::StateError;
use crate::id::EntityId;
use crate::kind::EntityKind;
use crate::record::{channel_ids_of, detach_channel, parent_of, Record};
use crate::view::ScopedCollection;
use serde::{Deserialize, Serialize};

/// Normalized state of everything configured in the installer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateParts", into = "StateParts")]
pub struct InstallerState {
    collections: [NamedCollection; EntityKind::COUNT],
}

/// Outcome of a removal, including cascaded records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Removed records, requested entity first
    pub removed: Vec<(EntityKind, EntityId)>,

    /// Chains whose channel list lost the removed channel
    pub detached_from: Vec<EntityId>,
}

impl Removal {
    /// Number of removed records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.removed.len()
    }

    /// Check if nothing was removed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Check if a record was removed
    #[must_use]
    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.removed
            .iter()
            .any(|(k, removed)| *k == kind && removed.as_str() == id)
    }
}

impl InstallerState {
    /// Create empty state
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: EntityKind::ALL.map(|kind| NamedCollection::new(kind.name_field())),
        }
    }

    /// Collection of one kind
    #[inline]
    #[must_use]
    pub fn collection(&self, kind: EntityKind) -> &NamedCollection {
        &self.collections[kind.index()]
    }

    /// Mutable collection of one kind
    ///
    /// Removing through this handle skips the cascade; use [`Self::remove`].
    #[inline]
    pub fn collection_mut(&mut self, kind: EntityKind) -> &mut NamedCollection {
        &mut self.collections[kind.index()]
    }

    /// Add a record under a caller-chosen id
    ///
    /// # Errors
    /// - `DuplicateId` if the id is already used by this kind
    /// - `MissingParent` / `UnknownParent` if a chain-owned record does not
    ///   name an existing chain
    pub fn add(
        &mut self,
        kind: EntityKind,
        id: EntityId,
        record: Record,
    ) -> Result<(), StateError> {
        self.check_parent(kind, &id, &record)?;
        tracing::trace!(%kind, %id, "adding record");
        self.collection_mut(kind).insert(id, record)
    }

    /// Add a record under a freshly generated id
    ///
    /// # Errors
    /// Same as [`Self::add`]; `DuplicateId` only on id generation collision
    pub fn add_new(&mut self, kind: EntityKind, record: Record) -> Result<EntityId, StateError> {
        let id = EntityId::generate();
        self.add(kind, id.clone(), record)?;
        Ok(id)
    }

    /// Replace a record
    ///
    /// # Errors
    /// - `UnknownId` if the record does not exist
    /// - `MissingParent` / `UnknownParent` as for [`Self::add`]
    pub fn update(
        &mut self,
        kind: EntityKind,
        id: &EntityId,
        record: Record,
    ) -> Result<Record, StateError> {
        if !self.collection(kind).contains(id) {
            return Err(StateError::UnknownId(id.clone()));
        }
        self.check_parent(kind, id, &record)?;
        self.collection_mut(kind).update(id, record)
    }

    /// Check that a chain-owned record names an existing chain
    fn check_parent(
        &self,
        kind: EntityKind,
        id: &EntityId,
        record: &Record,
    ) -> Result<(), StateError> {
        if !kind.has_parent_chain() {
            return Ok(());
        }
        match parent_of(record) {
            None => Err(StateError::MissingParent {
                kind,
                id: id.clone(),
            }),
            Some(parent) if !self.collection(EntityKind::Chain).contains(parent) => {
                Err(StateError::UnknownParent {
                    kind,
                    id: id.clone(),
                    parent: parent.to_string(),
                })
            }
            Some(_) => Ok(()),
        }
    }

    /// Remove a record and everything that depends on it
    ///
    /// # Errors
    /// Returns `UnknownId` if the record does not exist
    pub fn remove(&mut self, kind: EntityKind, id: &EntityId) -> Result<Removal, StateError> {
        if self.collection_mut(kind).remove(id).is_none() {
            return Err(StateError::UnknownId(id.clone()));
        }

        let mut removal = Removal::default();
        removal.removed.push((kind, id.clone()));

        match kind {
            EntityKind::Chain => {
                for child in EntityKind::CHAIN_CHILDREN {
                    let dropped = self
                        .collection_mut(child)
                        .retain(|_, record| parent_of(record) != Some(id.as_str()));
                    removal
                        .removed
                        .extend(dropped.into_iter().map(|child_id| (child, child_id)));
                }
            }
            EntityKind::Channel => {
                let chains = self.collection_mut(EntityKind::Chain);
                let referencing: Vec<EntityId> = chains
                    .ids_in_order()
                    .iter()
                    .filter(|chain_id| {
                        chains
                            .get(*chain_id)
                            .is_some_and(|r| channel_ids_of(r).contains(&id.as_str()))
                    })
                    .cloned()
                    .collect();
                for chain_id in referencing {
                    if let Some(record) = chains.get_mut(&chain_id) {
                        detach_channel(record, id.as_str());
                    }
                    removal.detached_from.push(chain_id);
                }
            }
            _ => {}
        }

        tracing::debug!(
            %kind,
            %id,
            removed = removal.len(),
            detached = removal.detached_from.len(),
            "removed record"
        );

        Ok(removal)
    }

    /// Chain-scoped views of the four data-source collections
    #[must_use]
    pub fn sources_of<'a>(&'a self, chain_id: &'a str) -> [ScopedCollection<'a>; 4] {
        EntityKind::DATA_SOURCES.map(|kind| ScopedCollection::new(self.collection(kind), chain_id))
    }

    /// Chain-scoped view of one collection
    #[inline]
    #[must_use]
    pub fn scoped<'a>(&'a self, kind: EntityKind, chain_id: &'a str) -> ScopedCollection<'a> {
        ScopedCollection::new(self.collection(kind), chain_id)
    }

    /// Total number of records across all kinds
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.collections.iter().map(NamedCollection::len).sum()
    }
}

impl Default for InstallerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form: one `byId`/`allIds` object per kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StateParts {
    chains: CollectionParts,
    nodes: CollectionParts,
    repositories: CollectionParts,
    systems: CollectionParts,
    docker_hubs: CollectionParts,
    channels: CollectionParts,
    users: CollectionParts,
    kms: CollectionParts,
}

impl StateParts {
    fn take(&mut self, kind: EntityKind) -> CollectionParts {
        let slot = match kind {
            EntityKind::Chain => &mut self.chains,
            EntityKind::Node => &mut self.nodes,
            EntityKind::Repository => &mut self.repositories,
            EntityKind::System => &mut self.systems,
            EntityKind::DockerHub => &mut self.docker_hubs,
            EntityKind::Channel => &mut self.channels,
            EntityKind::User => &mut self.users,
            EntityKind::Kms => &mut self.kms,
        };
        std::mem::take(slot)
    }
}

impl TryFrom<StateParts> for InstallerState {
    type Error = StateError;

    fn try_from(mut parts: StateParts) -> Result<Self, Self::Error> {
        let mut state = InstallerState::new();
        for kind in EntityKind::ALL {
            let collection = NamedCollection::from_parts(kind.name_field(), parts.take(kind))
                .map_err(|e| e.in_collection(kind))?;
            *state.collection_mut(kind) = collection;
        }

        // Chains are all loaded now, so children can be checked against them
        for kind in EntityKind::CHAIN_CHILDREN {
            for (id, record) in state.collection(kind).iter() {
                state.check_parent(kind, id, record)?;
            }
        }
        Ok(state)
    }
}

impl From<InstallerState> for StateParts {
    fn from(state: InstallerState) -> Self {
        let part = |kind: EntityKind| state.collection(kind).to_parts();
        Self {
            chains: part(EntityKind::Chain),
            nodes: part(EntityKind::Node),
            repositories: part(EntityKind::Repository),
            systems: part(EntityKind::System),
            docker_hubs: part(EntityKind::DockerHub),
            channels: part(EntityKind::Channel),
            users: part(EntityKind::User),
            kms: part(EntityKind::Kms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn new_state_names_each_collection() {
        let state = InstallerState::new();
        for kind in EntityKind::ALL {
            assert_eq!(state.collection(kind).name_field(), kind.name_field());
            assert!(state.collection(kind).is_empty());
        }
        assert_eq!(state.total_records(), 0);
    }

    #[test]
    fn remove_unknown_fails() {
        let mut state = InstallerState::new();
        let result = state.remove(EntityKind::Node, &EntityId::from("n1"));
        assert_eq!(result, Err(StateError::UnknownId(EntityId::from("n1"))));
    }

    #[test]
    fn remove_leaf_removes_only_itself() {
        let mut state = InstallerState::new();
        state
            .add(EntityKind::User, "u1".into(), record(json!({"username": "admin"})))
            .unwrap();
        let removal = state.remove(EntityKind::User, &"u1".into()).unwrap();
        assert_eq!(removal.removed, vec![(EntityKind::User, EntityId::from("u1"))]);
        assert!(removal.detached_from.is_empty());
    }

    #[test]
    fn add_new_generates_id() {
        let mut state = InstallerState::new();
        let id = state
            .add_new(EntityKind::Channel, record(json!({"channel_name": "ops"})))
            .unwrap();
        assert_eq!(state.collection(EntityKind::Channel).name_of(&id), Some("ops"));
    }

    #[test]
    fn deserialize_rejects_orphan_with_kind() {
        let value = json!({
            "nodes": {"byId": {}, "allIds": ["n1"]}
        });
        let err = serde_json::from_value::<InstallerState>(value).unwrap_err();
        assert!(err.to_string().contains("node collection"));
    }

    #[test]
    fn add_rejects_child_of_unknown_chain() {
        let mut state = InstallerState::new();
        let result = state.add(
            EntityKind::Node,
            "n1".into(),
            record(json!({"name": "ghost-node", "parent_id": "chain_9"})),
        );
        assert_eq!(
            result,
            Err(StateError::UnknownParent {
                kind: EntityKind::Node,
                id: "n1".into(),
                parent: "chain_9".into(),
            })
        );
        assert!(state.collection(EntityKind::Node).is_empty());
    }

    #[test]
    fn add_rejects_child_without_parent() {
        let mut state = InstallerState::new();
        let result = state.add_new(EntityKind::Repository, record(json!({"repo_name": "panic"})));
        assert!(matches!(
            result,
            Err(StateError::MissingParent {
                kind: EntityKind::Repository,
                ..
            })
        ));
        assert_eq!(state.total_records(), 0);
    }

    #[test]
    fn update_rejects_move_to_unknown_chain() {
        let mut state = InstallerState::new();
        state
            .add(EntityKind::Chain, "c1".into(), record(json!({"chain_name": "cosmos"})))
            .unwrap();
        state
            .add(
                EntityKind::Kms,
                "k1".into(),
                record(json!({"kms_name": "signer", "parent_id": "c1"})),
            )
            .unwrap();

        let result = state.update(
            EntityKind::Kms,
            &"k1".into(),
            record(json!({"kms_name": "signer", "parent_id": "c2"})),
        );
        assert!(matches!(result, Err(StateError::UnknownParent { .. })));
        assert_eq!(
            parent_of(state.collection(EntityKind::Kms).get("k1").unwrap()),
            Some("c1")
        );

        let missing = state.update(EntityKind::Kms, &"k9".into(), record(json!({})));
        assert_eq!(missing, Err(StateError::UnknownId("k9".into())));
    }

    #[test]
    fn deserialize_rejects_child_of_unknown_chain() {
        let value = json!({
            "nodes": {
                "byId": {"n1": {"name": "ghost-node", "parent_id": "nope"}},
                "allIds": ["n1"]
            }
        });
        let err = serde_json::from_value::<InstallerState>(value).unwrap_err();
        assert!(err.to_string().contains("unknown chain 'nope'"));
    }

    #[test]
    fn deserialize_accepts_child_listed_before_its_chain() {
        let state: InstallerState = serde_json::from_value(json!({
            "nodes": {
                "byId": {"n1": {"name": "validator", "parent_id": "c1"}},
                "allIds": ["n1"]
            },
            "chains": {"byId": {"c1": {"chain_name": "cosmos"}}, "allIds": ["c1"]}
        }))
        .unwrap();
        assert_eq!(state.total_records(), 2);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let state: InstallerState = serde_json::from_value(json!({
            "chains": {"byId": {"c1": {"chain_name": "cosmos"}}, "allIds": ["c1"]}
        }))
        .unwrap();
        assert_eq!(state.total_records(), 1);
        assert!(state.collection(EntityKind::Kms).is_empty());
    }
}
