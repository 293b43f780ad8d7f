// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Case-fold a single character for comparison.
///
/// Takes the first character of the lowercase mapping. Multi-character
/// mappings (`İ` → `i̇`) collapse to their base letter, which is what a
/// character-aligned matcher wants anyway.
#[inline]
pub fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Split a qualified name into its segments.
///
/// `"std::vec::Vec"` with `"::"` → `["std", "vec", "Vec"]`. An empty name has
/// no segments.
pub fn split_name<'a>(full_name: &'a str, delimiter: &str) -> Vec<&'a str> {
    if full_name.is_empty() {
        return Vec::new();
    }
    full_name.split(delimiter).collect()
}

/// Join segments back into a qualified name.
pub fn join_name<S: AsRef<str>>(segments: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Length in characters (not bytes). Highlight offsets are character offsets.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
