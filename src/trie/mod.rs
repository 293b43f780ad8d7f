// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The name trie.
//!
//! One node per distinct qualified-name prefix. `std::vec::Vec` and
//! `std::vec::IntoIter` share the `std` and `vec` nodes and fork below.
//!
//! Nodes live in an arena owned by the trie. A parent owns its children
//! through their slots; the parent link is a plain `NodeId` used to walk
//! upward and never keeps anything alive. Nothing is removed until `clear()`,
//! which throws the whole arena away and bumps the epoch so old handles fault
//! instead of silently pointing at new nodes.
//!
//! # Invariants
//!
//! - **UNIQUE_PATHS**: a node has at most one child per name id, so every
//!   root-to-node segment sequence is unique.
//! - **PARENT_LINKS**: `parent(child) == node` for every child of `node`;
//!   only the root has no parent and no name.

mod node_ref;

pub use node_ref::NodeRef;

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Id, NodeId};

/// One trie node: a single name segment plus the tokens that end here.
#[derive(Debug, Clone, Default)]
pub struct SearchNode {
    /// Interned segment; `None` only for the root
    name_id: Option<Id>,
    parent: Option<NodeId>,
    /// Children keyed by their name id
    children: BTreeMap<Id, NodeId>,
    token_ids: BTreeSet<Id>,
}

impl SearchNode {
    pub fn name_id(&self) -> Option<Id> {
        self.name_id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in name-id order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn token_ids(&self) -> &BTreeSet<Id> {
        &self.token_ids
    }

    /// A node without tokens only exists to hold its descendants.
    pub fn is_structural(&self) -> bool {
        self.token_ids.is_empty()
    }
}

/// Arena of `SearchNode`s rooted at slot 0.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<SearchNode>,
    epoch: u32,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![SearchNode::default()],
            epoch: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0, self.epoch)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Resolve a handle.
    ///
    /// Panics on handles from before the last `clear()`. Handles from another
    /// trie are not detected.
    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.check(id);
        &self.nodes[id.slot()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        self.check(id);
        &mut self.nodes[id.slot()]
    }

    fn check(&self, id: NodeId) {
        assert!(
            id.epoch == self.epoch && id.slot() < self.nodes.len(),
            "stale node handle {:?}: the index was cleared after it was issued",
            id
        );
    }

    /// Walk (and extend) the path below `from`, one name id per level.
    ///
    /// Existing children are reused, missing ones created. Returns the node
    /// the last id leads to, or `from` itself for an empty path.
    pub fn add_node_recursive(&mut self, from: NodeId, name_ids: &[Id]) -> NodeId {
        let Some((&name_id, rest)) = name_ids.split_first() else {
            return from;
        };

        let child = match self.get_child_with_name_id(from, name_id) {
            Some(child) => child,
            None => {
                let child = NodeId::new(self.nodes.len(), self.epoch);
                self.nodes.push(SearchNode {
                    name_id: Some(name_id),
                    parent: Some(from),
                    ..SearchNode::default()
                });
                self.node_mut(from).children.insert(name_id, child);
                child
            }
        };

        self.add_node_recursive(child, rest)
    }

    /// Same walk as `add_node_recursive`, but never creates anything.
    pub fn get_node_recursive(&self, from: NodeId, name_ids: &[Id]) -> Option<NodeId> {
        match name_ids.split_first() {
            None => Some(from),
            Some((&name_id, rest)) => {
                let child = self.get_child_with_name_id(from, name_id)?;
                self.get_node_recursive(child, rest)
            }
        }
    }

    pub fn get_child_with_name_id(&self, node: NodeId, name_id: Id) -> Option<NodeId> {
        self.node(node).children.get(&name_id).copied()
    }

    /// Register a token on a node. Returns false if it was already there.
    pub fn add_token_id(&mut self, node: NodeId, token_id: Id) -> bool {
        self.node_mut(node).token_ids.insert(token_id)
    }

    /// Structural ancestors directly above `node`, nearest first.
    ///
    /// Stops before the first ancestor carrying a token, and never includes
    /// the root.
    pub fn get_parents_without_token_id(&self, node: NodeId) -> Vec<NodeId> {
        let mut parents = Vec::new();
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            let parent = self.node(id);
            if parent.parent.is_none() || !parent.is_structural() {
                break;
            }
            parents.push(id);
            current = parent.parent;
        }
        parents
    }

    /// Nodes from `node` (inclusive) up to `boundary` (exclusive), leaf first.
    ///
    /// If `boundary` is not an ancestor the walk stops below the root.
    pub fn get_nodes_to_parent(&self, node: NodeId, boundary: NodeId) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == boundary {
                break;
            }
            let entry = self.node(id);
            if entry.parent.is_none() {
                break;
            }
            nodes.push(id);
            current = entry.parent;
        }
        nodes
    }

    /// Number of named segments from the root down to `node`.
    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            depth += 1;
            current = self.node(id).parent;
        }
        depth
    }

    /// Every node below the root, parents before children.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(node).children().collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let before = stack.len();
            stack.extend(self.node(id).children());
            stack[before..].reverse();
        }
        out
    }

    /// Drop every node except a fresh root. Outstanding handles go stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(SearchNode::default());
        self.epoch = self.epoch.wrapping_add(1);
    }
}
