// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: ordered subsequence search over name segments.
//!
//! The query doesn't have to be contiguous, it just has to appear in order.
//! `fb` finds `foo::bar`, `vecpush` finds `Vec::push`. Matching is done one
//! segment at a time; the trie traversal in `search` decides which segments
//! to chain together.

mod segment;

pub use segment::*;
