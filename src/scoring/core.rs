// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match weights.
//!
//! A segment's weight is the sum of its per-character costs:
//!
//! | Situation                                         | Cost                     |
//! |---------------------------------------------------|--------------------------|
//! | first hit at segment start (or right after `::`)  | `-segment_start_bonus`   |
//! | hit contiguous with the previous hit              | `0`                      |
//! | exact-case hit after a gap (`B` on `fooBar`)      | `0`                      |
//! | case-folded hit after a gap of `g` chars          | `g * gap_penalty`        |
//! | uppercase query char hits a lowercase char        | `+case_mismatch_penalty` |
//!
//! Query characters left over by a partial match cost
//! `unmatched_char_penalty` each. That term only orders children during
//! traversal; completed matches never carry it.
//!
//! # Key Invariant: Unmatched Dominance
//!
//! With the defaults, one unconsumed query character (10) costs more than any
//! realistic gap inside a segment, so best-first traversal always prefers the
//! child that eats more of the query.

use crate::config::ScoringWeights;
use crate::types::Weight;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Cost per skipped name character between two hits.
pub const GAP_PENALTY: Weight = 1;

/// Cost of an uppercase query character landing on a lowercase one.
pub const CASE_MISMATCH_PENALTY: Weight = 1;

/// Credit for a segment whose first hit is its first character.
pub const SEGMENT_START_BONUS: Weight = 1;

/// Cost per query character a partial match failed to consume.
pub const UNMATCHED_CHAR_PENALTY: Weight = 10;

/// Cost per scope skipped above a match chain that starts mid-hierarchy.
pub const SCOPE_SKIP_PENALTY: Weight = 2;

/// Where the previous hit of the current segment landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Previous {
    /// No hit yet in this segment.
    SegmentStart,
    /// Character position of the last hit.
    At(usize),
}

/// Cost of one matched character.
///
/// `pos` counts characters from the start of the segment text, which includes
/// the delimiter prefix (`prefix_len` chars) for every segment but the first
/// one of a chain. Gaps are measured from the end of the prefix at the
/// earliest, so skipping `::` or what is left of it is never charged.
pub fn char_cost(
    weights: &ScoringWeights,
    query_char: char,
    name_char: char,
    pos: usize,
    previous: Previous,
    prefix_len: usize,
) -> Weight {
    let exact = query_char == name_char;

    let position_cost = match previous {
        Previous::SegmentStart => {
            let gap = if pos >= prefix_len { pos - prefix_len } else { pos };
            if gap == 0 {
                -weights.segment_start_bonus
            } else if exact {
                0
            } else {
                gap_cost(weights, gap)
            }
        }
        Previous::At(last) => {
            // A hit inside the prefix leaves the rest of the prefix free
            let from = if pos >= prefix_len && last < prefix_len {
                prefix_len - 1
            } else {
                last
            };
            let gap = pos - from - 1;
            if gap == 0 || exact {
                0
            } else {
                gap_cost(weights, gap)
            }
        }
    };

    position_cost.saturating_add(case_cost(weights, query_char, name_char))
}

fn gap_cost(weights: &ScoringWeights, gap: usize) -> Weight {
    (gap as Weight).saturating_mul(weights.gap_penalty)
}

/// Explicit uppercase in the query is a hint; ignoring it costs a little.
pub fn case_cost(weights: &ScoringWeights, query_char: char, name_char: char) -> Weight {
    if query_char.is_uppercase() && !name_char.is_uppercase() {
        weights.case_mismatch_penalty
    } else {
        0
    }
}

/// Terminal penalty for the part of the query a partial match left over.
pub fn unmatched_penalty(weights: &ScoringWeights, unmatched: usize) -> Weight {
    (unmatched as Weight).saturating_mul(weights.unmatched_char_penalty)
}

/// Penalty for a chain that starts below the root.
///
/// `depth` is how many segments sit above the chain's first node and
/// `structural_run` how many of the nearest ones carry no tokens. Those are
/// namespaces of the matched entity and skipping them is free.
pub fn scope_skip_penalty(weights: &ScoringWeights, depth: usize, structural_run: usize) -> Weight {
    (depth.saturating_sub(structural_run) as Weight).saturating_mul(weights.scope_skip_penalty)
}
