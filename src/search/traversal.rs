// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-first fuzzy traversal of the trie.
//!
//! A match *chain* starts at some node, eats a prefix of the query with that
//! node's name, and continues into children with the rest. At every level the
//! children are scored against the remaining tail and visited cheapest first.
//! A child that can't consume a single character of the tail is dropped on the
//! spot: with fan-outs in the thousands (every function in a big namespace),
//! this pruning is the difference between a walk and a full scan.
//!
//! ```text
//! query "fb"          root
//!                    /    \
//!   chain start → foo      qux   ✗ ('f' not in "qux")
//!    "f" eaten   /   \
//!         ::bar ✓     ::baz ✓    both complete with "b"
//! ```
//!
//! Chains may start at any node, not just top-level ones, so `bar` finds
//! `foo::bar`. The node above a chain's first segment is recorded as the
//! result's `parent`; `get_matches` uses it to replay the chain.

use tracing::trace;

use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::fuzzy::{match_segment, Segment, SegmentMatch};
use crate::scoring::{scope_skip_penalty, unmatched_penalty};
use crate::trie::Trie;
use crate::types::{NodeId, SearchResult, SearchResults, Weight};

/// State of one query's traversal. Each query builds its own, so concurrent
/// queries never share anything mutable.
pub(crate) struct FuzzyTraversal<'a> {
    trie: &'a Trie,
    dictionary: &'a Dictionary,
    config: &'a SearchConfig,
    query: &'a [char],
    visited: usize,
    truncated: bool,
    results: SearchResults,
}

impl<'a> FuzzyTraversal<'a> {
    pub(crate) fn new(
        trie: &'a Trie,
        dictionary: &'a Dictionary,
        config: &'a SearchConfig,
        query: &'a [char],
    ) -> Self {
        FuzzyTraversal {
            trie,
            dictionary,
            config,
            query,
            visited: 0,
            truncated: false,
            results: SearchResults::new(),
        }
    }

    pub(crate) fn visited(&self) -> usize {
        self.visited
    }

    /// Did the node budget cut the search short?
    pub(crate) fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub(crate) fn into_results(self) -> SearchResults {
        self.results
    }

    /// Search at `node`, and with `recursive` everywhere below it.
    ///
    /// The root has no name, so it never starts a chain itself.
    pub(crate) fn search_from(&mut self, node: NodeId, recursive: bool) {
        if self.trie.node(node).parent().is_some() {
            self.start_chain(node, recursive);
        }
        if !recursive {
            return;
        }
        for start in self.trie.descendants(node) {
            if self.truncated {
                return;
            }
            self.start_chain(start, true);
        }
    }

    fn name(&self, node: NodeId) -> &'a str {
        match self.trie.node(node).name_id() {
            Some(id) => self.dictionary.get_word(id),
            None => "",
        }
    }

    /// Score one segment, or `None` once the budget is spent.
    fn evaluate(&mut self, segment: Segment<'_>, tail: &[char]) -> Option<SegmentMatch> {
        if let Some(max) = self.config.max_visited_nodes {
            if self.visited >= max {
                self.truncated = true;
                return None;
            }
        }
        self.visited += 1;
        Some(match_segment(&self.config.weights, segment, tail, None))
    }

    fn start_chain(&mut self, start: NodeId, recursive: bool) {
        let Some(boundary) = self.trie.node(start).parent() else {
            return;
        };
        let query = self.query;
        let segment = Segment::leading(self.name(start));
        let Some(first) = self.evaluate(segment, query) else {
            return;
        };
        if first.consumed == 0 {
            return;
        }

        let skipped = self.scope_penalty(start, boundary);
        self.extend_chain(start, boundary, 0, skipped, first, recursive);
    }

    /// Skipping structural scopes right above the chain start is free; every
    /// other skipped segment costs `scope_skip_penalty`.
    fn scope_penalty(&self, start: NodeId, boundary: NodeId) -> Weight {
        if boundary == self.trie.root() {
            return 0;
        }
        let depth = self.trie.depth(start) - 1;
        let structural = self.trie.get_parents_without_token_id(start).len();
        scope_skip_penalty(&self.config.weights, depth, structural)
    }

    /// `node` just consumed `matched.consumed` characters starting at `pos`.
    fn extend_chain(
        &mut self,
        node: NodeId,
        boundary: NodeId,
        pos: usize,
        weight: Weight,
        matched: SegmentMatch,
        recursive: bool,
    ) {
        let pos = pos + matched.consumed;
        let weight = weight.saturating_add(matched.weight);

        if pos == self.query.len() {
            trace!(?node, ?boundary, weight, "fuzzy completion");
            self.results.insert(SearchResult::new(weight, node, boundary));
            return;
        }
        if !recursive {
            return;
        }

        let (trie, config, query) = (self.trie, self.config, self.query);
        let tail = &query[pos..];
        let delimiter = config.delimiter.as_str();

        let mut candidates: Vec<(Weight, NodeId, SegmentMatch)> = Vec::new();
        for child in trie.node(node).children() {
            let segment = Segment::nested(delimiter, self.name(child));
            let Some(m) = self.evaluate(segment, tail) else {
                break;
            };
            if m.consumed == 0 {
                continue;
            }
            let partial = m
                .weight
                .saturating_add(unmatched_penalty(&config.weights, tail.len() - m.consumed));
            candidates.push((partial, child, m));
        }
        candidates.sort_by_key(|&(partial, child, _)| (partial, child));

        for (_, child, m) in candidates {
            self.extend_chain(child, boundary, pos, weight, m, true);
        }
    }
}
