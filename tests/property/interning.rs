//! Dictionary and trie construction properties.

use namesift::{join_name, Dictionary, Id, SearchIndex, DELIMITER};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C_]{1,4}").unwrap()
}

fn hierarchy_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Same word, same id; different words, different ids.
    #[test]
    fn prop_interning_is_a_bijection(words in prop::collection::vec(word_strategy(), 1..30)) {
        let mut dictionary = Dictionary::new();
        let ids: Vec<Id> = words.iter().map(|w| dictionary.get_word_id(w)).collect();

        for (word, id) in words.iter().zip(&ids) {
            prop_assert_eq!(dictionary.get_word_id(word), *id);
            prop_assert_eq!(dictionary.get_word(*id), word.as_str());
        }
        for (a, id_a) in words.iter().zip(&ids) {
            for (b, id_b) in words.iter().zip(&ids) {
                prop_assert_eq!(a == b, id_a == id_b);
            }
        }
    }

    /// Inserting twice changes nothing the second time.
    #[test]
    fn prop_insertion_is_idempotent(hierarchies in prop::collection::vec(hierarchy_strategy(), 1..15)) {
        let mut index = SearchIndex::new();
        let first: Vec<_> = hierarchies.iter().map(|h| index.add_node(h)).collect();
        let nodes = index.node_count();
        let words = index.dictionary().len();

        let second: Vec<_> = hierarchies.iter().map(|h| index.add_node(h)).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(index.node_count(), nodes);
        prop_assert_eq!(index.dictionary().len(), words);
    }

    /// Every inserted name can be found again by its joined form, and
    /// carries exactly the tokens registered on it.
    #[test]
    fn prop_lookup_finds_inserted_names(hierarchies in prop::collection::vec(hierarchy_strategy(), 1..15)) {
        let mut index = SearchIndex::new();
        for (i, h) in hierarchies.iter().enumerate() {
            index.insert(h, Id(i as u32));
        }

        for (i, h) in hierarchies.iter().enumerate() {
            let full = join_name(h, DELIMITER);
            let node = index.get_node(&full);
            prop_assert!(node.is_some(), "lost {}", full);
            let node = index.node(node.unwrap());
            prop_assert_eq!(node.full_name(), full);
            prop_assert!(node.token_ids().contains(&Id(i as u32)));
            prop_assert_eq!(node.depth(), h.len());
        }
    }
}
