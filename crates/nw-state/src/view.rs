//! Read-only views used by name validation
//!
//! [`NameSource`] is the narrow interface the validators scan: ordered ids, a
//! record lookup and the designated name field. Full collections and
//! chain-scoped slices of them both implement it, so a validator never needs
//! to know how many collections, or which kinds, it was handed.

use crate::collection::NamedCollection;
use crate::id::EntityId;
use crate::record::{name_of, parent_of, Record};

/// Read-only view of named records
pub trait NameSource {
    /// Field holding each record's name
    fn name_field(&self) -> &str;

    /// Ids in insertion order
    fn ids_in_order(&self) -> Box<dyn Iterator<Item = &EntityId> + '_>;

    /// Record lookup
    fn record(&self, id: &EntityId) -> Option<&Record>;

    /// Name of a record, if it has a string name
    fn name_of(&self, id: &EntityId) -> Option<&str> {
        self.record(id)
            .and_then(|record| name_of(record, self.name_field()))
    }
}

impl NameSource for NamedCollection {
    #[inline]
    fn name_field(&self) -> &str {
        NamedCollection::name_field(self)
    }

    fn ids_in_order(&self) -> Box<dyn Iterator<Item = &EntityId> + '_> {
        Box::new(NamedCollection::ids_in_order(self).iter())
    }

    #[inline]
    fn record(&self, id: &EntityId) -> Option<&Record> {
        self.get(id)
    }
}

/// Slice of a collection restricted to one chain's records
#[derive(Debug, Clone, Copy)]
pub struct ScopedCollection<'a> {
    inner: &'a NamedCollection,
    parent_id: &'a str,
}

impl<'a> ScopedCollection<'a> {
    /// Restrict a collection to records whose `parent_id` is `parent_id`
    #[inline]
    #[must_use]
    pub fn new(inner: &'a NamedCollection, parent_id: &'a str) -> Self {
        Self { inner, parent_id }
    }

    /// Chain the view is restricted to
    #[inline]
    #[must_use]
    pub fn parent_id(&self) -> &str {
        self.parent_id
    }

    fn in_scope(&self, record: &Record) -> bool {
        parent_of(record) == Some(self.parent_id)
    }
}

impl NameSource for ScopedCollection<'_> {
    #[inline]
    fn name_field(&self) -> &str {
        self.inner.name_field()
    }

    fn ids_in_order(&self) -> Box<dyn Iterator<Item = &EntityId> + '_> {
        Box::new(
            self.inner
                .iter()
                .filter(|(_, record)| self.in_scope(record))
                .map(|(id, _)| id),
        )
    }

    fn record(&self, id: &EntityId) -> Option<&Record> {
        self.inner.get(id).filter(|record| self.in_scope(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nodes() -> NamedCollection {
        let mut c = NamedCollection::new("name");
        let entries = [("n1", "alpha", "c1"), ("n2", "beta", "c2"), ("n3", "gamma", "c1")];
        for (id, name, parent) in entries {
            let record = json!({"name": name, "parent_id": parent})
                .as_object()
                .cloned()
                .unwrap();
            c.insert(EntityId::from(id), record).unwrap();
        }
        c
    }

    #[test]
    fn collection_view_lists_all_ids() {
        let c = nodes();
        let view: &dyn NameSource = &c;
        let ids: Vec<&str> = view.ids_in_order().map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["n1", "n2", "n3"]);
        assert_eq!(view.name_of(&EntityId::from("n2")), Some("beta"));
    }

    #[test]
    fn scoped_view_filters_by_parent() {
        let c = nodes();
        let scoped = ScopedCollection::new(&c, "c1");
        let ids: Vec<&str> = scoped.ids_in_order().map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
        assert!(scoped.record(&EntityId::from("n2")).is_none());
        assert_eq!(scoped.name_of(&EntityId::from("n3")), Some("gamma"));
    }

    #[test]
    fn scoped_view_of_unknown_chain_is_empty() {
        let c = nodes();
        let scoped = ScopedCollection::new(&c, "c9");
        assert_eq!(scoped.ids_in_order().count(), 0);
    }
}
