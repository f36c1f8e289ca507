use nw_state::NameSource;
use nw_test_utils::collection;
use nw_validation::{
    all_elements_present_in_list, elements_missing_from_list, has_no_forbidden_character,
    is_name_available,
};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{0,4}", 0..6)
}

fn build(field: &str, names: &[String]) -> nw_state::NamedCollection {
    let entries: Vec<(String, &str)> = names
        .iter()
        .enumerate()
        .map(|(i, n)| (format!("{field}-{i}"), n.as_str()))
        .collect();
    let pairs: Vec<(&str, &str)> = entries.iter().map(|(id, n)| (id.as_str(), *n)).collect();
    collection(field, &pairs)
}

proptest! {
    #[test]
    fn prop_available_iff_no_record_has_name(
        candidate in "[a-z]{0,4}",
        a in names(),
        b in names(),
    ) {
        let ca = build("name", &a);
        let cb = build("repo_name", &b);
        let expected = !a.contains(&candidate) && !b.contains(&candidate);
        prop_assert_eq!(is_name_available(&candidate, &[&ca, &cb]), expected);
    }

    #[test]
    fn prop_source_order_does_not_matter(
        candidate in "[a-z]{0,3}",
        a in names(),
        b in names(),
        c in names(),
    ) {
        let ca = build("name", &a);
        let cb = build("repo_name", &b);
        let cc = build("channel_name", &c);
        let forward: [&dyn NameSource; 3] = [&ca, &cb, &cc];
        let backward: [&dyn NameSource; 3] = [&cc, &ca, &cb];
        prop_assert_eq!(
            is_name_available(&candidate, &forward),
            is_name_available(&candidate, &backward)
        );
    }

    #[test]
    fn prop_zero_sources_always_available(candidate in ".*") {
        prop_assert!(is_name_available(&candidate, &[]));
    }

    #[test]
    fn prop_brackets_always_rejected(
        prefix in "[^\\[\\]]*",
        suffix in ".*",
        open in any::<bool>()
    ) {
        let bracket = if open { '[' } else { ']' };
        let candidate = format!("{prefix}{bracket}{suffix}");
        prop_assert!(!has_no_forbidden_character(&candidate));
        prop_assert!(has_no_forbidden_character(&prefix));
    }

    #[test]
    fn prop_missing_is_empty_iff_subset(
        values in proptest::collection::vec("[a-d]", 0..6),
        allowed in proptest::collection::vec("[a-d]", 0..4),
    ) {
        let missing = elements_missing_from_list(&values, &allowed);
        prop_assert_eq!(missing.is_empty(), all_elements_present_in_list(&values, &allowed));
        for m in &missing {
            prop_assert!(!allowed.contains(m));
        }
    }
}
