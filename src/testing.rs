// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::search::SearchIndex;
use crate::types::{Id, SearchMatch};
use crate::utils::{fold_case, split_name};

/// Build an index from `::`-joined names. Token id = position in `names`.
pub fn make_index(names: &[&str]) -> SearchIndex {
    let mut index = SearchIndex::new();
    for (i, name) in names.iter().enumerate() {
        let segments = split_name(name, index.delimiter());
        index.insert(&segments, Id(i as u32));
    }
    index
}

/// Check that the highlighted characters of `m` spell `query`, ignoring case.
pub fn highlights_spell_query(m: &SearchMatch, query: &str) -> bool {
    let chars: Vec<char> = m.full_name.chars().collect();
    let increasing = m.indices.windows(2).all(|w| w[0] < w[1]);
    let in_bounds = m.indices.iter().all(|&i| i < chars.len());
    if !increasing || !in_bounds || m.indices.len() != query.chars().count() {
        return false;
    }
    m.indices
        .iter()
        .zip(query.chars())
        .all(|(&i, q)| fold_case(chars[i]) == fold_case(q))
}
