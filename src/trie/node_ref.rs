// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Borrowed view of one node, with names resolved.
//!
//! A `NodeRef` borrows the index it came from, so it cannot outlive it or
//! survive a `clear()`. Use `NodeId` when you need a handle that can be held
//! across mutations.

use std::collections::BTreeSet;
use std::fmt;

use super::{SearchNode, Trie};
use crate::dictionary::Dictionary;
use crate::types::{Id, NodeId};

#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a Trie,
    dictionary: &'a Dictionary,
    delimiter: &'a str,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(
        trie: &'a Trie,
        dictionary: &'a Dictionary,
        delimiter: &'a str,
        id: NodeId,
    ) -> Self {
        // Resolve eagerly so a stale id faults here, not on first use
        trie.node(id);
        NodeRef {
            trie,
            dictionary,
            delimiter,
            id,
        }
    }

    fn with(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef {
            id,
            ..*self
        }
    }

    fn entry(&self) -> &'a SearchNode {
        self.trie.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.entry().parent().is_none()
    }

    /// This node's segment. Empty for the root.
    pub fn name(&self) -> &'a str {
        match self.entry().name_id() {
            Some(id) => self.dictionary.get_word(id),
            None => "",
        }
    }

    pub fn name_id(&self) -> Option<Id> {
        self.entry().name_id()
    }

    /// Delimiter-joined path from the top-level segment down to this node.
    pub fn full_name(&self) -> String {
        let mut segments: Vec<&str> = self
            .trie
            .get_nodes_to_parent(self.id, self.trie.root())
            .into_iter()
            .map(|id| self.with(id).name())
            .collect();
        segments.reverse();
        segments.join(self.delimiter)
    }

    pub fn token_ids(&self) -> &'a BTreeSet<Id> {
        self.entry().token_ids()
    }

    /// Smallest registered token, if any.
    pub fn first_token_id(&self) -> Option<Id> {
        self.token_ids().iter().next().copied()
    }

    pub fn is_structural(&self) -> bool {
        self.entry().is_structural()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.entry().parent().map(|id| self.with(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let this = *self;
        self.entry().children().map(move |id| this.with(id))
    }

    pub fn child_with_name_id(&self, name_id: Id) -> Option<NodeRef<'a>> {
        self.trie
            .get_child_with_name_id(self.id, name_id)
            .map(|id| self.with(id))
    }

    /// See [`Trie::get_parents_without_token_id`].
    pub fn parents_without_token_id(&self) -> Vec<NodeRef<'a>> {
        self.trie
            .get_parents_without_token_id(self.id)
            .into_iter()
            .map(|id| self.with(id))
            .collect()
    }

    /// See [`Trie::get_nodes_to_parent`].
    pub fn nodes_to_parent(&self, boundary: NodeId) -> Vec<NodeRef<'a>> {
        self.trie
            .get_nodes_to_parent(self.id, boundary)
            .into_iter()
            .map(|id| self.with(id))
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.trie.depth(self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.trie, other.trie)
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("full_name", &self.full_name())
            .field("token_ids", self.token_ids())
            .finish()
    }
}
