//! Normalized entity collection
//!
//! Provides [`NamedCollection`], a `byId` map paired with the insertion-ordered
//! `allIds` list. Every listed id has exactly one record and every record is
//! listed; the fields are private so the pairing cannot drift.

use crate::error::StateError;
use crate::id::EntityId;
use crate::record::{name_of, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// `byId` map plus ordered `allIds` list of one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCollection {
    /// Field holding each record's name
    name_field: String,

    /// Records keyed by id
    by_id: HashMap<EntityId, Record>,

    /// Ids in insertion order
    all_ids: Vec<EntityId>,
}

/// Serialized form of a collection: `{"byId": {...}, "allIds": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionParts {
    /// Records keyed by id
    #[serde(default)]
    pub by_id: IndexMap<EntityId, Record>,

    /// Ids in insertion order
    #[serde(default)]
    pub all_ids: Vec<EntityId>,
}

impl NamedCollection {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new(name_field: impl Into<String>) -> Self {
        Self {
            name_field: name_field.into(),
            by_id: HashMap::new(),
            all_ids: Vec::new(),
        }
    }

    /// Build from raw `byId`/`allIds` parts
    ///
    /// # Errors
    /// - `DuplicateId` if an id is listed twice
    /// - `OrphanId` if a listed id has no record
    /// - `UnlistedRecord` if a record is not listed
    pub fn from_parts(
        name_field: impl Into<String>,
        parts: CollectionParts,
    ) -> Result<Self, StateError> {
        let CollectionParts { by_id, all_ids } = parts;

        {
            let mut seen = HashSet::with_capacity(all_ids.len());
            for id in &all_ids {
                if !seen.insert(id) {
                    return Err(StateError::DuplicateId(id.clone()));
                }
                if !by_id.contains_key(id) {
                    return Err(StateError::OrphanId(id.clone()));
                }
            }

            // Every listed id has a record; anything left over is unlisted
            if let Some(unlisted) = by_id.keys().find(|id| !seen.contains(id)) {
                return Err(StateError::UnlistedRecord(unlisted.clone()));
            }
        }

        Ok(Self {
            name_field: name_field.into(),
            by_id: by_id.into_iter().collect(),
            all_ids,
        })
    }

    /// Convert to serializable parts, `byId` in `allIds` order
    #[must_use]
    pub fn to_parts(&self) -> CollectionParts {
        CollectionParts {
            by_id: self
                .iter()
                .map(|(id, record)| (id.clone(), record.clone()))
                .collect(),
            all_ids: self.all_ids.clone(),
        }
    }

    /// Field holding each record's name
    #[inline]
    #[must_use]
    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    /// Insert a new record
    ///
    /// # Errors
    /// Returns `DuplicateId` if the id is already present
    pub fn insert(&mut self, id: EntityId, record: Record) -> Result<(), StateError> {
        if self.by_id.contains_key(&id) {
            return Err(StateError::DuplicateId(id));
        }
        self.all_ids.push(id.clone());
        self.by_id.insert(id, record);
        Ok(())
    }

    /// Replace an existing record, keeping its position
    ///
    /// # Errors
    /// Returns `UnknownId` if the id is not present
    pub fn update(&mut self, id: &EntityId, record: Record) -> Result<Record, StateError> {
        match self.by_id.get_mut(id) {
            Some(slot) => Ok(std::mem::replace(slot, record)),
            None => Err(StateError::UnknownId(id.clone())),
        }
    }

    /// Remove a record and its listing
    pub fn remove<Q>(&mut self, id: &Q) -> Option<Record>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let record = self.by_id.remove(id)?;
        self.all_ids.retain(|listed| <EntityId as Borrow<Q>>::borrow(listed) != id);
        Some(record)
    }

    /// Remove every record the predicate rejects, returning removed ids in order
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<EntityId>
    where
        F: FnMut(&EntityId, &Record) -> bool,
    {
        let by_id = &mut self.by_id;
        let mut removed = Vec::new();
        self.all_ids.retain(|id| {
            let keep_it = by_id.get(id).is_some_and(|record| keep(id, record));
            if !keep_it {
                by_id.remove(id);
                removed.push(id.clone());
            }
            keep_it
        });
        removed
    }

    /// Get record by id
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, id: &Q) -> Option<&Record>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_id.get(id)
    }

    /// Get mutable record by id
    ///
    /// Mutating a record cannot break the id pairing.
    #[inline]
    pub fn get_mut<Q>(&mut self, id: &Q) -> Option<&mut Record>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_id.get_mut(id)
    }

    /// Name of a record, if it has a string name
    #[inline]
    #[must_use]
    pub fn name_of<Q>(&self, id: &Q) -> Option<&str>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(id).and_then(|record| name_of(record, &self.name_field))
    }

    /// Check if id is present
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_id.contains_key(id)
    }

    /// Ids in insertion order
    #[inline]
    #[must_use]
    pub fn ids_in_order(&self) -> &[EntityId] {
        &self.all_ids
    }

    /// Iterate `(id, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Record)> {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_id.get(id).map(|record| (id, record)))
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }
}

impl Serialize for NamedCollection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_parts().serialize(serializer)
    }
}
