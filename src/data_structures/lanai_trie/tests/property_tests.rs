// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Lanai Trie.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::lanai_trie::Trie;

// Small alphabet so generated keys share prefixes often
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

// Arbitrary Unicode keys
fn unicode_key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 0..24)
}

fn build(keys: &[String]) -> Trie {
    let mut trie = Trie::empty();
    for key in keys {
        trie.insert(Some(key.as_str()));
    }
    trie
}

proptest! {
    // Property: every inserted non-empty key is found afterwards
    #[test]
    fn prop_insert_then_search(key in unicode_key_strategy()) {
        let mut trie = Trie::empty();
        trie.insert(Some(key.as_str()));
        prop_assert_eq!(trie.search(Some(key.as_str())), !key.is_empty());
    }

    // Property: inserting twice produces the same tree as inserting once
    #[test]
    fn prop_insert_idempotent(keys in keys_strategy(), key in key_strategy()) {
        let mut once = build(&keys);
        once.insert(Some(key.as_str()));
        let mut twice = build(&keys);
        twice.insert(Some(key.as_str()));
        twice.insert(Some(key.as_str()));
        prop_assert_eq!(once.root(), twice.root());
    }

    // Property: after insert then erase the key is no longer searchable
    #[test]
    fn prop_erase_removes_searchability(keys in keys_strategy(), key in unicode_key_strategy()) {
        let mut trie = build(&keys);
        trie.insert(Some(key.as_str()));
        prop_assert!(trie.erase(Some(key.as_str())));
        prop_assert!(!trie.search(Some(key.as_str())));
    }

    // Property: erasing one key never affects any other stored key
    #[test]
    fn prop_erase_preserves_other_keys(keys in keys_strategy(), victim in key_strategy()) {
        let mut trie = build(&keys);
        let expected: BTreeSet<String> = keys
            .iter()
            .filter(|k| !k.is_empty() && **k != victim)
            .cloned()
            .collect();

        trie.erase(Some(victim.as_str()));

        let actual: BTreeSet<String> = trie.keys().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    // Property: erase reports true exactly when the character path exists
    #[test]
    fn prop_erase_result_matches_path(keys in keys_strategy(), candidate in key_strategy()) {
        let mut trie = build(&keys);
        let path_exists = trie.depth_first_search(Some(candidate.as_str())).is_some();
        prop_assert_eq!(trie.erase(Some(candidate.as_str())), path_exists);
    }

    // Property: pruning leaves no dead weight; every leaf is terminal
    #[test]
    fn prop_no_dead_leaves_after_erase(keys in keys_strategy(), erased in keys_strategy()) {
        let mut trie = build(&keys);
        for key in &erased {
            trie.erase(Some(key.as_str()));
        }

        // A trie built only from the survivors has exactly the same shape
        let survivors = trie.keys();
        let rebuilt = build(&survivors);
        prop_assert_eq!(trie.root(), rebuilt.root());
    }

    // Property: erasing every inserted key empties the trie, whatever the order
    #[test]
    fn prop_erase_all_empties(
        (keys, order) in keys_strategy()
            .prop_flat_map(|keys| (Just(keys.clone()), Just(keys).prop_shuffle()))
    ) {
        let mut trie = build(&keys);
        for key in &order {
            trie.erase(Some(key.as_str()));
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 0);
    }

    // Property: len agrees with the distinct non-empty keys inserted
    #[test]
    fn prop_len_counts_distinct_keys(keys in keys_strategy()) {
        let trie = build(&keys);
        let distinct: BTreeSet<&String> = keys.iter().filter(|k| !k.is_empty()).collect();
        prop_assert_eq!(trie.len(), distinct.len());
        prop_assert_eq!(trie.keys().len(), distinct.len());
        prop_assert_eq!(trie.is_empty(), distinct.is_empty());
    }
}
