//! Shared test utilities and fixtures.

#![allow(dead_code)]

use namesift::{SearchIndex, SearchMatch};

// Re-export canonical test utilities from namesift::testing
pub use namesift::testing::{highlights_spell_query, make_index};

/// A small slice of a standard library, enough to exercise nesting, shared
/// prefixes and camel humps.
pub const STD_NAMES: &[&str] = &[
    "std::collections::HashMap",
    "std::collections::HashSet",
    "std::collections::hash_map::Entry",
    "std::vec::Vec",
    "std::vec::IntoIter",
    "std::io::Read",
    "std::io::Write",
    "core::fmt::Display",
];

pub fn std_index() -> SearchIndex {
    make_index(STD_NAMES)
}

/// Full names of `matches`, in rank order.
pub fn names(matches: &[SearchMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.full_name.as_str()).collect()
}

/// The match for `name`, panicking with the ranked list if it is missing.
pub fn find<'a>(matches: &'a [SearchMatch], name: &str) -> &'a SearchMatch {
    matches
        .iter()
        .find(|m| m.full_name == name)
        .unwrap_or_else(|| panic!("{} not in {:?}", name, names(matches)))
}
