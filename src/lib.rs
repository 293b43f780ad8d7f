// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over hierarchical names.
//!
//! Register qualified identifiers (`std::vec::Vec`, `foo::bar::baz`) one by
//! one, then query with a partial or abbreviated string and get back ranked
//! matches with the matched characters marked for highlighting.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ dictionary.rs │────▶│   trie/      │────▶│   search/      │
//! │  (word ⟷ Id)  │     │ (SearchNode, │     │ (SearchIndex,  │
//! │               │     │   NodeRef)   │     │  traversal,    │
//! └───────────────┘     └──────────────┘     │  get_matches)  │
//!                                            └────────────────┘
//!        ┌──────────────────────┐                    │
//!        │ fuzzy/ + scoring/    │◀───────────────────┘
//!        │ (segment matcher,    │
//!        │  weights, ranking)   │
//!        └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use namesift::{Id, SearchIndex};
//!
//! let mut index = SearchIndex::new();
//! let node = index.add_node(&["a", "b"]);
//! index.add_token_id(node, Id(1));
//! index.add_token_id(node, Id(2));
//!
//! assert_eq!(index.get_node("a::b"), Some(node));
//!
//! let matches = index.run_fuzzy_search_and_get_matches("ab");
//! assert_eq!(matches[0].full_name, "a::b");
//! assert_eq!(matches[0].token_ids.len(), 2);
//! ```

// Module declarations
pub mod config;
mod dictionary;
mod error;
pub mod fuzzy;
pub mod scoring;
mod search;
#[cfg(feature = "parallel")]
mod shared;
pub mod testing;
mod trie;
mod types;
mod utils;

// Re-exports for public API
pub use config::{ScoringWeights, SearchConfig, DELIMITER, MAX_WEIGHT};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use scoring::ranking::compare_matches;
pub use search::SearchIndex;
#[cfg(feature = "parallel")]
pub use shared::SharedSearchIndex;
pub use trie::{NodeRef, SearchNode, Trie};
pub use types::{Id, NodeId, SearchMatch, SearchResult, SearchResults, Weight};
pub use utils::{fold_case, join_name, split_name};
