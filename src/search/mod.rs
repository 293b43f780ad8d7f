// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: where names go in and ranked matches come out.
//!
//! `SearchIndex` owns the trie and the dictionary behind it. Building is a
//! stream of `add_node` / `add_token_id` calls; querying is read-only and runs
//! on `&self`, so any number of threads can query a shared index while the
//! borrow checker keeps writers out.
//!
//! ```
//! use namesift::{Id, SearchIndex};
//!
//! let mut index = SearchIndex::new();
//! index.insert(&["foo", "bar"], Id(1));
//! index.insert(&["foo", "baz"], Id(2));
//! index.insert(&["qux"], Id(3));
//!
//! let matches = index.run_fuzzy_search_and_get_matches("fb");
//! let names: Vec<_> = matches.iter().map(|m| m.full_name.as_str()).collect();
//! assert_eq!(names, ["foo::bar", "foo::baz"]);
//! ```

mod matches;
mod traversal;

use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::trie::{NodeRef, Trie};
use crate::types::{Id, NodeId, SearchMatch, SearchResults};
use crate::utils::split_name;

use traversal::FuzzyTraversal;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// In-memory fuzzy index over hierarchical names.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    trie: Trie,
    dictionary: Dictionary,
    config: SearchConfig,
}

impl SearchIndex {
    /// Empty index with the default `::` delimiter and weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty index with a validated custom config.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(SearchIndex {
            trie: Trie::new(),
            dictionary: Dictionary::new(),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Drop every name and word. Node handles issued so far go stale.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.trie.len(),
            words = self.dictionary.len(),
            "clearing search index"
        );
        self.trie.clear();
        self.dictionary.clear();
    }

    // -------------------------------------------------------------------------
    // Dictionary pass-through
    // -------------------------------------------------------------------------

    pub fn get_word_id(&mut self, word: &str) -> Id {
        self.dictionary.get_word_id(word)
    }

    /// Panics on ids this index never issued.
    pub fn get_word(&self, word_id: Id) -> &str {
        self.dictionary.get_word(word_id)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    // -------------------------------------------------------------------------
    // Building
    // -------------------------------------------------------------------------

    /// Insert a hierarchy (already split into segments) and return its node.
    ///
    /// Inserting the same hierarchy again returns the same node and adds
    /// nothing. The node carries no token until `add_token_id` is called.
    ///
    /// Panics if a segment contains the delimiter: its full name would
    /// collide with a deeper path.
    pub fn add_node<S: AsRef<str>>(&mut self, hierarchy: &[S]) -> NodeId {
        let delimiter = self.config.delimiter.as_str();
        let name_ids: Vec<Id> = hierarchy
            .iter()
            .map(|segment| {
                let segment = segment.as_ref();
                assert!(
                    !segment.contains(delimiter),
                    "segment {:?} contains the delimiter {:?}",
                    segment,
                    delimiter
                );
                self.dictionary.get_word_id(segment)
            })
            .collect();
        let root = self.trie.root();
        self.trie.add_node_recursive(root, &name_ids)
    }

    /// Register a token on a node. Returns false if it was already there.
    pub fn add_token_id(&mut self, node: NodeId, token_id: Id) -> bool {
        self.trie.add_token_id(node, token_id)
    }

    /// `add_node` followed by `add_token_id`.
    pub fn insert<S: AsRef<str>>(&mut self, hierarchy: &[S], token_id: Id) -> NodeId {
        let node = self.add_node(hierarchy);
        self.add_token_id(node, token_id);
        node
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Exact lookup of a delimiter-joined name. Never interns anything.
    pub fn get_node(&self, full_name: &str) -> Option<NodeId> {
        let segments = split_name(full_name, &self.config.delimiter);
        if segments.is_empty() {
            return None;
        }
        let name_ids = segments
            .iter()
            .map(|segment| self.dictionary.find(segment))
            .collect::<Option<Vec<Id>>>()?;
        self.trie.get_node_recursive(self.trie.root(), &name_ids)
    }

    /// Borrowed view of a node. Panics on stale handles.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(&self.trie, &self.dictionary, &self.config.delimiter, id)
    }

    pub fn root(&self) -> NodeId {
        self.trie.root()
    }

    /// Nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// True when nothing has been inserted since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    // -------------------------------------------------------------------------
    // Fuzzy search
    // -------------------------------------------------------------------------

    /// Every completion of `query` anywhere in the trie, best weight first.
    pub fn run_fuzzy_search(&self, query: &str) -> SearchResults {
        self.run_fuzzy_search_from(self.trie.root(), query, true)
    }

    /// Fuzzy search scoped to `node`.
    ///
    /// Without `recursive` only the node's own segment is tried. With it,
    /// chains may continue through descendants and may also start at any
    /// descendant, so a query can match the tail of a qualified name.
    pub fn run_fuzzy_search_from(&self, node: NodeId, query: &str, recursive: bool) -> SearchResults {
        let query: Vec<char> = query.chars().collect();
        if query.is_empty() {
            return SearchResults::new();
        }

        let mut traversal = FuzzyTraversal::new(&self.trie, &self.dictionary, &self.config, &query);
        traversal.search_from(node, recursive);

        if traversal.is_truncated() {
            debug!(
                visited = traversal.visited(),
                "fuzzy search stopped at the node budget"
            );
        }
        traversal.into_results()
    }

    /// Compile raw results into ranked, highlighted matches.
    ///
    /// One match per node, carrying the cheapest completion found for it.
    /// `query` must be the query that produced `results`.
    pub fn get_matches(&self, results: &SearchResults, query: &str) -> Vec<SearchMatch> {
        matches::compile_matches(self, results, query)
    }

    pub fn run_fuzzy_search_and_get_matches(&self, query: &str) -> Vec<SearchMatch> {
        let results = self.run_fuzzy_search(query);
        self.get_matches(&results, query)
    }

    /// Run independent queries in parallel. Output order follows `queries`.
    #[cfg(feature = "parallel")]
    pub fn run_fuzzy_search_batch<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<Vec<SearchMatch>> {
        queries
            .par_iter()
            .map(|query| self.run_fuzzy_search_and_get_matches(query.as_ref()))
            .collect()
    }

    /// Emit matches to the log: a summary line, then one event per match.
    pub fn log_matches(matches: &[SearchMatch], query: &str) {
        info!(query, count = matches.len(), "fuzzy search matches");
        for m in matches {
            debug!(
                weight = m.weight,
                name = %m.full_name,
                tokens = ?m.token_ids,
                "\n{}",
                m
            );
        }
    }
}
