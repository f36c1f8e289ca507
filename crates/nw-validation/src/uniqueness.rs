//! Cross-collection name uniqueness
//!
//! A name is available when no record in any of the given sources carries it
//! in its designated name field. Comparison is exact: case-sensitive, no
//! trimming, and the empty string is an ordinary name.

use nw_state::{EntityId, NameSource};

/// First record found carrying a candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Position of the source in the slice that was scanned
    pub source_index: usize,

    /// Id of the colliding record
    pub id: EntityId,
}

/// Check that no source already uses `candidate` as a name
///
/// Returns `true` when the name is free, including when `sources` is empty
/// or every source is empty. Stops at the first match.
///
/// # Performance
/// O(n) in the total number of records scanned
#[must_use]
pub fn is_name_available(candidate: &str, sources: &[&dyn NameSource]) -> bool {
    find_name_collision(candidate, sources).is_none()
}

/// Find the first record using `candidate` as a name
///
/// Sources are scanned in slice order and records in insertion order.
/// Records whose name field is missing or not a string never match.
#[must_use]
pub fn find_name_collision(candidate: &str, sources: &[&dyn NameSource]) -> Option<Collision> {
    for (source_index, source) in sources.iter().enumerate() {
        for id in source.ids_in_order() {
            if source.name_of(id) == Some(candidate) {
                tracing::trace!(candidate, %id, source_index, "name collision");
                return Some(Collision {
                    source_index,
                    id: id.clone(),
                });
            }
        }
    }
    None
}
