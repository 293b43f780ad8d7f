// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-segment matching.
//!
//! Greedy and leftmost: each query character takes the first case-insensitive
//! occurrence at or after the previous hit. Greedy can miss a cheaper
//! alignment inside one segment, but it is linear, and it is deterministic,
//! which lets `get_matches` replay a chain and land on exactly the indices
//! the traversal scored.

use crate::config::ScoringWeights;
use crate::scoring::{char_cost, Previous};
use crate::types::Weight;
use crate::utils::fold_case;

/// The text one trie node contributes to a match chain.
///
/// The first node of a chain is matched by its bare name. Every later node
/// is matched as `prefix + name` where `prefix` is the delimiter, so a query
/// typed with explicit separators (`foo::b`) still lines up.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
}

impl<'a> Segment<'a> {
    /// First segment of a chain: no delimiter in front.
    pub fn leading(name: &'a str) -> Self {
        Segment { prefix: "", name }
    }

    /// Any later segment: delimiter in front.
    pub fn nested(delimiter: &'a str, name: &'a str) -> Self {
        Segment {
            prefix: delimiter,
            name,
        }
    }

    /// Length in characters, delimiter included.
    pub fn char_len(&self) -> usize {
        self.prefix.chars().count() + self.name.chars().count()
    }

    fn chars(&self) -> impl Iterator<Item = char> + 'a {
        self.prefix.chars().chain(self.name.chars())
    }
}

/// How much of a query one segment managed to consume, and at what cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentMatch {
    /// Query characters consumed, counted from the start of the tail.
    pub consumed: usize,
    /// Sum of the per-character costs. Zero when nothing was consumed.
    pub weight: Weight,
}

impl SegmentMatch {
    /// Did this segment eat every character it was offered?
    pub fn is_complete(&self, tail_len: usize) -> bool {
        self.consumed == tail_len
    }
}

/// Match `query` against one segment.
///
/// Hits are appended to `indices` as character positions within the segment
/// text (prefix included) when a buffer is supplied.
pub fn match_segment(
    weights: &ScoringWeights,
    segment: Segment<'_>,
    query: &[char],
    mut indices: Option<&mut Vec<usize>>,
) -> SegmentMatch {
    let prefix_len = segment.prefix.chars().count();
    let mut text = segment.chars().enumerate();
    let mut result = SegmentMatch::default();
    let mut previous = Previous::SegmentStart;

    'query: for &query_char in query {
        let wanted = fold_case(query_char);
        for (pos, name_char) in text.by_ref() {
            if fold_case(name_char) != wanted {
                continue;
            }
            result.weight = result
                .weight
                .saturating_add(char_cost(weights, query_char, name_char, pos, previous, prefix_len));
            result.consumed += 1;
            previous = Previous::At(pos);
            if let Some(out) = indices.as_deref_mut() {
                out.push(pos);
            }
            continue 'query;
        }
        // Segment exhausted before the query was
        break;
    }

    result
}
