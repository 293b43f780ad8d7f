// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compiling raw results into `SearchMatch`es.
//!
//! The traversal only remembers where a chain started and where it ended.
//! Highlights are rebuilt here by replaying the segment matcher along the
//! chain: the matcher is greedy and deterministic, so the replay consumes
//! exactly what the traversal consumed.
//!
//! **Invariant**: each node appears at most once in the output, carrying the
//! cheapest completion found for it.

use std::collections::HashSet;

use super::SearchIndex;
use crate::fuzzy::{match_segment, Segment};
use crate::scoring::ranking::compare_matches;
use crate::types::{NodeId, SearchMatch, SearchResult, SearchResults};
use crate::utils::char_len;

pub(super) fn compile_matches(
    index: &SearchIndex,
    results: &SearchResults,
    query: &str,
) -> Vec<SearchMatch> {
    let query: Vec<char> = query.chars().collect();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut matches = Vec::new();

    // Ascending weight, so the first result per node is its cheapest
    for result in results {
        if seen.insert(result.node) {
            matches.push(fuzzy_match_data(index, result, &query));
        }
    }

    matches.sort_by(compare_matches);
    matches
}

/// Replay one chain and turn it into a match.
fn fuzzy_match_data(index: &SearchIndex, result: &SearchResult, query: &[char]) -> SearchMatch {
    let node = index.node(result.node);
    let boundary = index.node(result.parent);
    let delimiter = index.delimiter();
    let weights = &index.config().weights;

    let mut chain = node.nodes_to_parent(result.parent);
    chain.reverse();

    // Where the chain's first name starts inside the full name
    let mut cursor = if boundary.is_root() {
        0
    } else {
        char_len(&boundary.full_name()) + char_len(delimiter)
    };

    let mut pos = 0;
    let mut indices = Vec::with_capacity(query.len());
    for (i, link) in chain.iter().enumerate() {
        let segment = if i == 0 {
            Segment::leading(link.name())
        } else {
            Segment::nested(delimiter, link.name())
        };

        let mut local = Vec::new();
        let matched = match_segment(weights, segment, &query[pos..], Some(&mut local));
        indices.extend(local.into_iter().map(|offset| offset + cursor));

        pos += matched.consumed;
        cursor += segment.char_len();
    }
    debug_assert_eq!(pos, query.len(), "replayed chain did not consume the query");

    SearchMatch {
        full_name: node.full_name(),
        token_ids: node.token_ids().clone(),
        indices,
        weight: result.weight,
    }
}
