use drift_core::{ConfigTree, ConfigValue, diff, lookup};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn key() -> impl Strategy<Value = String> {
    // Small alphabets so generated trees share keys often, including keys
    // that spell out another key's nested path
    prop_oneof!["[a-d]{1,2}", "[ab.\"]{0,3}"]
}

fn leaf() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(ConfigValue::from),
        (-5i64..5).prop_map(ConfigValue::from),
        any::<bool>().prop_map(ConfigValue::from),
        (-10.0f64..10.0).prop_map(ConfigValue::from),
    ]
}

fn value() -> impl Strategy<Value = ConfigValue> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(ConfigValue::List),
            prop::collection::btree_map(key(), inner, 0..4).prop_map(ConfigValue::Table),
        ]
    })
}

fn tree() -> impl Strategy<Value = ConfigTree> {
    prop::collection::btree_map(key(), value(), 0..5)
}

proptest! {
    #[test]
    fn test_diff_of_identical_trees_is_empty(t in tree()) {
        prop_assert!(diff(&t, &t).is_empty());
    }

    #[test]
    fn test_paths_are_classified_correctly(existing in tree(), canonical in tree()) {
        let result = diff(&existing, &canonical);

        for path in &result.added {
            prop_assert!(lookup(&existing, path).is_none(), "added {} exists", path);
            prop_assert!(lookup(&canonical, path).is_some(), "added {} missing", path);
        }
        for path in &result.removed {
            prop_assert!(lookup(&existing, path).is_some(), "removed {} missing", path);
            prop_assert!(lookup(&canonical, path).is_none(), "removed {} exists", path);
        }
        for path in &result.modified {
            let old = lookup(&existing, path);
            let new = lookup(&canonical, path);
            prop_assert!(old.is_some() && new.is_some());
            prop_assert_ne!(old, new);
            prop_assert!(!(old.unwrap().is_table() && new.unwrap().is_table()));
        }
    }

    #[test]
    fn test_sequences_are_disjoint_and_sorted(existing in tree(), canonical in tree()) {
        let result = diff(&existing, &canonical);

        let added: BTreeSet<_> = result.added.iter().collect();
        let removed: BTreeSet<_> = result.removed.iter().collect();
        let modified: BTreeSet<_> = result.modified.iter().collect();
        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&modified));
        prop_assert!(removed.is_disjoint(&modified));

        for seq in [&result.added, &result.removed, &result.modified] {
            prop_assert!(seq.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_swapping_sides_swaps_added_and_removed(a in tree(), b in tree()) {
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);
        prop_assert_eq!(forward.added, backward.removed);
        prop_assert_eq!(forward.removed, backward.added);
        prop_assert_eq!(forward.modified, backward.modified);
    }
}
