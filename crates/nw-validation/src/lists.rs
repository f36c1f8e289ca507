//! List-membership helpers
//!
//! Used to check user-supplied token lists (chain names, channel types,
//! repository names) against a known set. Equality is exact.

use indexmap::IndexSet;
use std::hash::Hash;

/// Check that every candidate appears in `allowed`
///
/// An empty candidate list is trivially contained.
#[must_use]
pub fn all_elements_present_in_list<T: PartialEq>(candidates: &[T], allowed: &[T]) -> bool {
    candidates.iter().all(|c| allowed.contains(c))
}

/// Candidates that do not appear in `allowed`, in candidate order
///
/// Duplicated candidates are reported once per occurrence.
#[must_use]
pub fn elements_missing_from_list<T: PartialEq + Clone>(
    candidates: &[T],
    allowed: &[T],
) -> Vec<T> {
    candidates
        .iter()
        .filter(|c| !allowed.contains(c))
        .cloned()
        .collect()
}

/// Values occurring more than once, in order of first occurrence
#[must_use]
pub fn duplicate_elements<T: Eq + Hash + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = IndexSet::with_capacity(list.len());
    let mut repeated = IndexSet::new();
    for item in list {
        if !seen.insert(item) {
            repeated.insert(item);
        }
    }
    // Order by first occurrence, not by first repetition
    seen.into_iter()
        .filter(|item| repeated.contains(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_check() {
        assert!(all_elements_present_in_list(&["x", "y"], &["x", "y", "z"]));
        assert!(!all_elements_present_in_list(&["x", "w"], &["x", "y", "z"]));
        assert!(all_elements_present_in_list::<&str>(&[], &[]));
        assert!(!all_elements_present_in_list(&["x"], &[]));
    }

    #[test]
    fn subset_check_is_case_sensitive() {
        assert!(!all_elements_present_in_list(&["X"], &["x"]));
    }

    #[test]
    fn missing_elements_keep_order_and_repeats() {
        let missing = elements_missing_from_list(&["w", "x", "v", "w"], &["x", "y"]);
        assert_eq!(missing, vec!["w", "v", "w"]);
        assert!(elements_missing_from_list(&["x"], &["x", "y"]).is_empty());
    }

    #[test]
    fn duplicates_in_first_occurrence_order() {
        assert_eq!(duplicate_elements(&["b", "a", "a", "b", "b", "c"]), vec!["b", "a"]);
        assert!(duplicate_elements(&["a", "b"]).is_empty());
        assert!(duplicate_elements::<u8>(&[]).is_empty());
    }
}
