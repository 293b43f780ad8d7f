// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a name index.
//!
//! Handles, raw traversal results and the compiled matches callers see.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Id**: issued by one `Dictionary` (for words) or by the caller (for
//!   tokens). Never reused, never recycled.
//!
//! - **NodeId**: only meaningful for the `SearchIndex` that issued it, and only
//!   until that index is cleared. The `epoch` field catches stale handles.
//!
//! - **SearchResult**: ordered by `(weight, node, parent)`. The identity fields
//!   only exist so that equal-weight results stay distinct inside a `BTreeSet`.
//!
//! - **SearchMatch**: `indices` are ascending character offsets into
//!   `full_name`, one per query character.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe handles
// =============================================================================

/// Opaque handle for an interned word or a caller-defined token.
///
/// Words get their ids from the index's `Dictionary`; token ids are chosen by
/// the caller and only stored, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Id(pub u32);

impl Id {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Id(id)
    }
}

impl From<Id> for usize {
    fn from(id: Id) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-owning handle of a trie node.
///
/// A plain arena slot plus the epoch of the trie it was issued from. Handles
/// are `Copy` and cheap to compare, which is what result ordering needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub(crate) slot: u32,
    pub(crate) epoch: u32,
}

impl NodeId {
    #[inline]
    pub(crate) fn new(slot: usize, epoch: u32) -> Self {
        NodeId {
            slot: slot as u32,
            epoch,
        }
    }

    /// Arena slot of the node.
    #[inline]
    pub fn slot(self) -> usize {
        self.slot as usize
    }
}

/// Match cost. Lower is better and it can go negative (boundary bonuses).
pub type Weight = i64;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Raw outcome of a fuzzy traversal: one completed match chain.
///
/// `parent` is the boundary node directly above the first segment of the
/// chain. It is the root for chains that start at a top-level name.
///
/// Field order matters: the derived `Ord` sorts by weight first, then uses the
/// node and parent handles as deterministic tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchResult {
    pub weight: Weight,
    pub node: NodeId,
    pub parent: NodeId,
}

impl SearchResult {
    pub fn new(weight: Weight, node: NodeId, parent: NodeId) -> Self {
        SearchResult {
            weight,
            node,
            parent,
        }
    }
}

/// Totally ordered set of raw results, best weight first.
pub type SearchResults = BTreeSet<SearchResult>;

/// What callers get back: a ranked, highlighted qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// Delimiter-joined name from the top-level segment down to the match.
    pub full_name: String,
    /// Tokens registered on the matched node (empty for structural nodes).
    pub token_ids: BTreeSet<Id>,
    /// Character offsets into `full_name` hit by the query, ascending.
    pub indices: Vec<usize>,
    pub weight: Weight,
}

impl SearchMatch {
    /// Canonical query form of this match.
    ///
    /// The delimiter-joined full name: `SearchIndex::get_node` resolves it back
    /// to the same node, and searching for it ranks that node first.
    pub fn encode_for_query(&self) -> String {
        self.full_name.clone()
    }

    /// Whether the character at `offset` in `full_name` was matched.
    pub fn is_highlighted(&self, offset: usize) -> bool {
        self.indices.binary_search(&offset).is_ok()
    }

    /// The matched characters, in order.
    pub fn matched_text(&self) -> String {
        let wanted: HashSet<usize> = self.indices.iter().copied().collect();
        self.full_name
            .chars()
            .enumerate()
            .filter(|(i, _)| wanted.contains(i))
            .map(|(_, c)| c)
            .collect()
    }
}

/// Diagnostic form: weight and name on one line, carets under the
/// highlighted characters on the next.
impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\t{}", self.weight, self.full_name)?;
        write!(f, "\t")?;
        let mut column = 0;
        for &index in &self.indices {
            while column < index {
                write!(f, " ")?;
                column += 1;
            }
            write!(f, "^")?;
            column += 1;
        }
        Ok(())
    }
}
