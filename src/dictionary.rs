// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word interning for name segments.
//!
//! Every segment of every qualified name goes through here. `std` appearing in
//! ten thousand paths? Store it once, compare by `Id` everywhere else. Trie
//! nodes only keep the id; the string lives in this table until the owning
//! index is cleared.

use std::collections::HashMap;

use crate::types::Id;

/// A bidirectional word ⟷ id table.
///
/// Ids are dense and handed out in insertion order, so the reverse lookup is
/// a plain vector index.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Interned words, indexed by id
    words: Vec<String>,
    /// Reverse lookup: word → id
    lookup: HashMap<String, Id>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a word and return its id.
    ///
    /// If the word already exists, returns the existing id.
    pub fn get_word_id(&mut self, word: &str) -> Id {
        if let Some(&id) = self.lookup.get(word) {
            return id;
        }

        let id = Id(u32::try_from(self.words.len()).expect("dictionary id space exhausted"));
        self.words.push(word.to_string());
        self.lookup.insert(word.to_string(), id);
        id
    }

    /// Look up a word without interning it.
    pub fn find(&self, word: &str) -> Option<Id> {
        self.lookup.get(word).copied()
    }

    /// The word behind an id issued by this dictionary.
    ///
    /// Panics on an id this dictionary never issued: that is a caller bug, not
    /// a lookup miss.
    pub fn get_word(&self, id: Id) -> &str {
        match self.try_get_word(id) {
            Some(word) => word,
            None => panic!(
                "word id {} was not issued by this dictionary ({} words)",
                id,
                self.words.len()
            ),
        }
    }

    /// Like [`get_word`](Self::get_word), but `None` for unknown ids.
    pub fn try_get_word(&self, id: Id) -> Option<&str> {
        self.words.get(id.as_usize()).map(String::as_str)
    }

    /// Number of interned words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forget every word. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.words.clear();
        self.lookup.clear();
    }
}
