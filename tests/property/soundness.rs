//! Search output properties: highlights, ordering, uniqueness, determinism.

use crate::common::highlights_spell_query;
use namesift::{compare_matches, Id, SearchIndex};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB]{1,5}").unwrap()
}

fn hierarchy_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..4)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(hierarchy_strategy(), 1..12)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB:]{1,6}").unwrap()
}

fn build(corpus: &[Vec<String>]) -> SearchIndex {
    let mut index = SearchIndex::new();
    for (i, h) in corpus.iter().enumerate() {
        index.insert(h, Id(i as u32));
    }
    index
}

/// Case-insensitive ordered subsequence.
fn is_subsequence(query: &str, text: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| text.any(|t| t == q))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Highlighted characters always spell the query, in order.
    #[test]
    fn prop_highlights_spell_query(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        for m in index.run_fuzzy_search_and_get_matches(&query) {
            prop_assert!(highlights_spell_query(&m, &query), "{:?} on {}", query, m);
        }
    }

    /// Output is sorted by (weight, full name), one entry per name.
    #[test]
    fn prop_ranked_and_unique(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        let matches = index.run_fuzzy_search_and_get_matches(&query);

        for pair in matches.windows(2) {
            prop_assert_ne!(compare_matches(&pair[0], &pair[1]), Ordering::Greater);
        }
        let unique: HashSet<&str> = matches.iter().map(|m| m.full_name.as_str()).collect();
        prop_assert_eq!(unique.len(), matches.len());
    }

    /// A query hidden inside a name's last segment always finds that name.
    #[test]
    fn prop_last_segment_subsequence_is_found(corpus in corpus_strategy(), query in "[abc]{1,3}") {
        let index = build(&corpus);
        let found: HashSet<String> = index
            .run_fuzzy_search_and_get_matches(&query)
            .into_iter()
            .map(|m| m.full_name)
            .collect();

        for h in &corpus {
            let last = h.last().unwrap();
            if is_subsequence(&query, last) {
                let full = h.join("::");
                prop_assert!(found.contains(&full), "{:?} missed {}", query, full);
            }
        }
    }

    /// Typing a name out in full finds that name.
    #[test]
    fn prop_full_name_finds_itself(corpus in corpus_strategy()) {
        let index = build(&corpus);
        for h in &corpus {
            let full = h.join("::");
            let matches = index.run_fuzzy_search_and_get_matches(&full);
            prop_assert!(matches.iter().any(|m| m.full_name == full), "lost {}", full);
        }
    }

    /// Same corpus, same query, same answer, whichever index answers.
    #[test]
    fn prop_deterministic(corpus in corpus_strategy(), query in query_strategy()) {
        let a = build(&corpus);
        let b = build(&corpus);
        let first = a.run_fuzzy_search_and_get_matches(&query);
        prop_assert_eq!(&first, &a.run_fuzzy_search_and_get_matches(&query));
        prop_assert_eq!(&first, &b.run_fuzzy_search_and_get_matches(&query));
    }

    /// Each match weighs no more than any raw completion of its node.
    #[test]
    fn prop_match_keeps_cheapest_completion(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        let results = index.run_fuzzy_search(&query);
        let matches = index.get_matches(&results, &query);

        for m in &matches {
            let node = index.get_node(&m.full_name).unwrap();
            let cheapest = results.iter().filter(|r| r.node == node).map(|r| r.weight).min();
            prop_assert_eq!(Some(m.weight), cheapest);
        }
    }
}
