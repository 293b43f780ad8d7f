//! Custom delimiters, weights and node budgets.

use crate::common::{make_index, names};
use namesift::{Error, Id, ScoringWeights, SearchConfig, SearchIndex, MAX_WEIGHT};
use std::io::Write;
use tempfile::NamedTempFile;

fn index_with(json: &str, hierarchies: &[&[&str]]) -> SearchIndex {
    let config = SearchConfig::from_json(json).unwrap();
    let mut index = SearchIndex::with_config(config).unwrap();
    for (i, hierarchy) in hierarchies.iter().copied().enumerate() {
        index.insert(hierarchy, Id(i as u32));
    }
    index
}

#[test]
fn test_dotted_names() {
    let index = index_with(
        r#"{"delimiter": "."}"#,
        &[&["java", "util", "List"], &["java", "util", "Map"]],
    );

    assert!(index.get_node("java.util.List").is_some());
    assert_eq!(index.get_node("java::util::List"), None);

    let matches = index.run_fuzzy_search_and_get_matches("ju.L");
    assert_eq!(matches[0].full_name, "java.util.List");
    assert_eq!(matches[0].indices, vec![0, 5, 9, 10]);
}

#[test]
fn test_gap_penalty_override() {
    let index = index_with(
        r#"{"weights": {"gapPenalty": 0}}"#,
        &[&["foo_Bar"], &["fBar"]],
    );
    let matches = index.run_fuzzy_search_and_get_matches("fb");

    // Gaps are free, so both tie and the name decides
    assert_eq!(names(&matches), vec!["fBar", "foo_Bar"]);
    assert!(matches.iter().all(|m| m.weight == -1));
}

#[test]
fn test_node_budget_truncates() {
    let unbounded = make_index(&["foo::bar", "foo::baz", "qux"]);
    assert_eq!(unbounded.run_fuzzy_search("fb").len(), 2);

    let tight = index_with(
        r#"{"maxVisitedNodes": 1}"#,
        &[&["foo", "bar"], &["foo", "baz"], &["qux"]],
    );
    assert!(tight.run_fuzzy_search("fb").is_empty());

    let enough = index_with(
        r#"{"maxVisitedNodes": 3}"#,
        &[&["foo", "bar"], &["foo", "baz"], &["qux"]],
    );
    assert_eq!(enough.run_fuzzy_search("fb").len(), 2);
}

#[test]
fn test_invalid_configs_are_rejected() {
    assert!(matches!(
        SearchConfig::from_json(r#"{"delimiter": ""}"#),
        Err(Error::EmptyDelimiter)
    ));
    assert!(matches!(
        SearchConfig::from_json(r#"{"weights": {"unmatchedCharPenalty": 0}}"#),
        Err(Error::InvalidWeights(_))
    ));
    assert!(matches!(
        SearchConfig::from_json("{not json"),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"delimiter": "/", "maxVisitedNodes": 100}"#)
        .unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.delimiter, "/");
    assert_eq!(config.max_visited_nodes, Some(100));
    assert_eq!(config.weights, Default::default());

    assert!(matches!(
        SearchConfig::from_file("/nonexistent/namesift.json"),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_oversized_weights_are_rejected() {
    assert!(matches!(
        SearchConfig::from_json(r#"{"weights": {"gapPenalty": 9223372036854775807}}"#),
        Err(Error::InvalidWeights(_))
    ));

    let config = SearchConfig {
        weights: ScoringWeights {
            unmatched_char_penalty: MAX_WEIGHT + 1,
            ..ScoringWeights::default()
        },
        ..SearchConfig::default()
    };
    assert!(SearchIndex::with_config(config).is_err());
}

#[test]
fn test_largest_weights_still_search() {
    let json = format!(
        r#"{{"weights": {{"gapPenalty": {max}, "caseMismatchPenalty": {max}, "unmatchedCharPenalty": {max}, "scopeSkipPenalty": {max}}}}}"#,
        max = MAX_WEIGHT
    );
    let index = index_with(&json, &[&["a"], &["a", "foobar"]]);

    let matches = index.run_fuzzy_search_and_get_matches("fR");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].full_name, "a::foobar");
    assert!(matches[0].weight > 0);
}
