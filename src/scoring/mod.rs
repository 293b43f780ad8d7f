// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! Weights are costs. Every matched character adds what it took to reach it,
//! boundary hits earn a small credit, and whatever a partial match couldn't
//! consume is charged heavily. Ranking sorts ascending.

mod core;
pub mod ranking;

pub use self::core::*;
