// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A `SearchIndex` that can be handed to several threads.
//!
//! Queries take the read lock and run side by side; inserts and `clear()`
//! take the write lock and wait for in-flight queries to finish. Results are
//! returned as owned `SearchMatch`es, never node handles, so nothing a reader
//! holds can dangle after a writer clears the index.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::search::SearchIndex;
use crate::types::{Id, SearchMatch};

/// Cloneable, thread-safe handle to one index.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchIndex {
    inner: Arc<RwLock<SearchIndex>>,
}

impl SharedSearchIndex {
    pub fn new(index: SearchIndex) -> Self {
        SharedSearchIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Insert a hierarchy and register `token_id` on it.
    pub fn insert<S: AsRef<str>>(&self, hierarchy: &[S], token_id: Id) {
        self.inner.write().insert(hierarchy, token_id);
    }

    /// Insert many names under a single write lock.
    pub fn extend<I, H, S>(&self, entries: I)
    where
        I: IntoIterator<Item = (H, Id)>,
        H: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut index = self.inner.write();
        for (hierarchy, token_id) in entries {
            index.insert(hierarchy.as_ref(), token_id);
        }
    }

    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        self.inner.read().run_fuzzy_search_and_get_matches(query)
    }

    /// Token ids registered under an exact qualified name.
    pub fn lookup(&self, full_name: &str) -> Option<Vec<Id>> {
        let index = self.inner.read();
        let node = index.get_node(full_name)?;
        Some(index.node(node).token_ids().iter().copied().collect())
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Hold the read lock for several operations in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, SearchIndex> {
        self.inner.read()
    }
}
