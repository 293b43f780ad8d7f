// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match ranking: how compiled matches get sorted.
//!
//! Weight decides. The full name only breaks ties, which keeps output stable
//! across runs and insertion orders. Two matches can't share a full name:
//! each node has a unique path and no segment contains the delimiter.

use crate::types::SearchMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking.
///
/// Sort order:
/// 1. **Weight** - ascending, cheaper matches first
/// 2. **Full name** - lexical tiebreaker for determinism
pub fn compare_matches(a: &SearchMatch, b: &SearchMatch) -> Ordering {
    a.weight
        .cmp(&b.weight)
        .then_with(|| a.full_name.cmp(&b.full_name))
}
