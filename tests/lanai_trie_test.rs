// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Lanai Trie through the public API.

use lanai_lib::data_structures::{Trie, TrieNode};

fn is_prefix_node(node: &TrieNode) -> bool {
    !node.is_terminal() && !node.is_leaf()
}

#[test]
fn test_fresh_trie() {
    let mut trie = Trie::empty();
    assert!(trie.is_empty());

    trie.insert(None);
    assert!(trie.is_empty());
    assert!(!trie.search(None));
    assert!(!trie.erase(None));

    let root = trie.depth_first_search(Some("")).expect("root");
    assert!(!root.is_terminal());
    assert!(root.is_leaf());
}

#[test]
fn test_but_button_home_homespun() {
    let mut trie = Trie::empty();
    for word in ["but", "button", "home", "homespun"] {
        trie.insert(Some(word));
    }

    assert!(trie.erase(Some("but")));
    assert!(trie.erase(Some("home")));

    let but = trie.depth_first_search(Some("but")).expect("but chain");
    let home = trie.depth_first_search(Some("home")).expect("home chain");
    assert!(is_prefix_node(but));
    assert!(is_prefix_node(home));
    assert!(trie.search(Some("button")));
    assert!(trie.search(Some("homespun")));
}

#[test]
fn test_car_carp_carpet_full_pruning() {
    let mut trie = Trie::empty();
    for word in ["car", "carp", "carpet"] {
        trie.insert(Some(word));
    }

    for word in ["carp", "carpet", "car"] {
        assert!(trie.erase(Some(word)), "erase {word}");
        assert!(!trie.search(Some(word)));
    }
    assert!(trie.is_empty());
}

#[test]
fn test_absent_erase_is_harmless() {
    let words = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"];
    let mut trie = Trie::empty();
    for word in words {
        trie.insert(Some(word));
    }
    let rendered = trie.to_string();

    assert!(!trie.erase(Some("xyz")));
    assert_eq!(trie.to_string(), rendered);
    for word in words {
        assert!(trie.search(Some(word)));
    }
}

#[test]
fn test_erase_reports_path_not_key() {
    let mut trie = Trie::empty();
    trie.insert(Some("carpet"));

    // "car" was never inserted, but its path exists
    assert!(!trie.search(Some("car")));
    assert!(trie.erase(Some("car")));
    assert!(trie.search(Some("carpet")));
    assert_eq!(trie.node_count(), 6);
}

#[test]
fn test_divergent_traversal_returns_none() {
    let mut trie = Trie::empty();
    trie.insert(Some("carpet"));
    trie.insert(Some("cello"));

    assert!(trie.depth_first_search(Some("cat")).is_none());
    assert!(trie.depth_first_search(Some("celt")).is_none());
    assert!(trie.depth_first_search(Some("ce")).is_some());
}

#[test]
fn test_root_child_access() {
    let mut trie = Trie::empty();
    trie.insert(Some("ab"));

    let a = trie.root().child('a').expect("a");
    assert!(!a.is_terminal());
    assert_eq!(a.child_count(), 1);
    assert!(a.child('b').expect("b").is_terminal());
    assert_eq!(trie.root().children().count(), 1);
}
