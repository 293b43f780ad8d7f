//! End-to-end scenarios: build an index, query it, read the matches.

use crate::common::{find, highlights_spell_query, make_index, names, std_index};
use namesift::{Id, SearchIndex};

#[test]
fn test_abbreviation_matches_every_sibling() {
    let index = make_index(&["foo::bar", "foo::baz", "qux"]);

    let matches = index.run_fuzzy_search_and_get_matches("fb");

    assert_eq!(names(&matches), vec!["foo::bar", "foo::baz"]);
    for m in &matches {
        assert_eq!(m.weight, -2);
        assert_eq!(m.indices, vec![0, 5]);
    }
    assert_eq!(find(&matches, "foo::bar").token_ids.iter().copied().collect::<Vec<_>>(), vec![Id(0)]);
    assert_eq!(find(&matches, "foo::baz").token_ids.iter().copied().collect::<Vec<_>>(), vec![Id(1)]);
}

#[test]
fn test_tokens_on_one_name_share_a_match() {
    let mut index = SearchIndex::new();
    let node = index.add_node(&["a", "b"]);
    assert!(index.add_token_id(node, Id(1)));
    assert!(index.add_token_id(node, Id(2)));
    assert!(!index.add_token_id(node, Id(2)));

    let matches = index.run_fuzzy_search_and_get_matches("ab");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].full_name, "a::b");
    assert_eq!(matches[0].token_ids.len(), 2);
}

#[test]
fn test_query_matching_nothing() {
    let index = std_index();
    assert!(index.run_fuzzy_search_and_get_matches("zzz").is_empty());
    assert!(index.run_fuzzy_search_and_get_matches("").is_empty());
}

#[test]
fn test_suffix_of_qualified_name() {
    let index = std_index();
    let matches = index.run_fuzzy_search_and_get_matches("Entry");

    let entry = find(&matches, "std::collections::hash_map::Entry");
    assert_eq!(entry.matched_text(), "Entry");
    assert_eq!(entry.indices, (28..33).collect::<Vec<_>>());
}

#[test]
fn test_chain_across_three_segments() {
    let index = std_index();
    let matches = index.run_fuzzy_search_and_get_matches("chmE");

    let entry = find(&matches, "std::collections::hash_map::Entry");
    assert!(highlights_spell_query(entry, "chmE"));
}

#[test]
fn test_every_highlight_spells_the_query() {
    let index = std_index();
    for query in ["hm", "HashM", "vec", "std::io", "iow", "Disp", "s::c::H"] {
        let matches = index.run_fuzzy_search_and_get_matches(query);
        assert!(!matches.is_empty(), "nothing for {:?}", query);
        for m in &matches {
            assert!(highlights_spell_query(m, query), "{:?} on {}", query, m);
        }
    }
}

#[test]
fn test_structural_nodes_are_reported() {
    let index = make_index(&["std::vec::Vec"]);
    let matches = index.run_fuzzy_search_and_get_matches("Vec");

    // Vec itself, and the token-less vec module
    assert_eq!(names(&matches), vec!["std::vec::Vec", "std::vec"]);
    assert_eq!(matches[0].weight, -1);
    assert_eq!(matches[1].weight, 0);
    assert!(matches[1].token_ids.is_empty());
}

#[test]
fn test_clear_then_rebuild() {
    let mut index = make_index(&["foo::bar", "foo::baz"]);
    index.clear();

    assert!(index.is_empty());
    assert!(index.run_fuzzy_search_and_get_matches("fb").is_empty());

    index.insert(&["foo", "bar"], Id(9));
    let matches = index.run_fuzzy_search_and_get_matches("fb");
    assert_eq!(names(&matches), vec!["foo::bar"]);
    assert!(matches[0].token_ids.contains(&Id(9)));
}

#[test]
#[should_panic(expected = "stale node handle")]
fn test_handle_from_before_clear_panics() {
    let mut index = make_index(&["foo::bar"]);
    let stale = index.get_node("foo::bar").unwrap();
    index.clear();
    index.insert(&["foo", "bar"], Id(1));

    let _ = index.node(stale);
}

#[test]
fn test_search_scoped_to_subtree() {
    let index = std_index();
    let io = index.get_node("std::io").unwrap();

    let results = index.run_fuzzy_search_from(io, "W", true);
    let matches = index.get_matches(&results, "W");

    assert_eq!(names(&matches), vec!["std::io::Write"]);
}

#[test]
fn test_encode_for_query_is_the_full_name() {
    let index = std_index();
    let matches = index.run_fuzzy_search_and_get_matches("HashSet");
    let m = find(&matches, "std::collections::HashSet");

    let again = index.run_fuzzy_search_and_get_matches(&m.encode_for_query());
    assert_eq!(again[0].full_name, "std::collections::HashSet");
}
