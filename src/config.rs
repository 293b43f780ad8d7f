// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index configuration: delimiter, scoring weights and traversal budget.
//!
//! The delimiter is fixed for the lifetime of an index. Mixing `::` and `.`
//! inside one index would break both `get_node` and match highlighting, so
//! there is no setter; build a new index instead.
//!
//! Configs load from JSON (camelCase keys, every field optional):
//!
//! ```json
//! { "delimiter": ".", "weights": { "gapPenalty": 2 }, "maxVisitedNodes": 50000 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::{
    CASE_MISMATCH_PENALTY, GAP_PENALTY, SCOPE_SKIP_PENALTY, SEGMENT_START_BONUS,
    UNMATCHED_CHAR_PENALTY,
};
use crate::types::Weight;

/// Separator between the segments of a qualified name.
pub const DELIMITER: &str = "::";

/// Tunable constants of the weight model. See `scoring` for how each applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Cost per name character skipped between two matched characters.
    pub gap_penalty: Weight,
    /// Cost of an uppercase query character matching a lowercase one.
    pub case_mismatch_penalty: Weight,
    /// Credit for a segment whose first match sits on its first character.
    pub segment_start_bonus: Weight,
    /// Cost per query character a partial match leaves unconsumed.
    pub unmatched_char_penalty: Weight,
    /// Cost per skipped scope above a match that starts mid-hierarchy.
    pub scope_skip_penalty: Weight,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            gap_penalty: GAP_PENALTY,
            case_mismatch_penalty: CASE_MISMATCH_PENALTY,
            segment_start_bonus: SEGMENT_START_BONUS,
            unmatched_char_penalty: UNMATCHED_CHAR_PENALTY,
            scope_skip_penalty: SCOPE_SKIP_PENALTY,
        }
    }
}

/// Largest accepted value for any single weight. Keeps per-query sums far
/// from `Weight` overflow even on long names and deep chains.
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

impl ScoringWeights {
    /// All weights are in `0..=MAX_WEIGHT`; the unmatched penalty must be
    /// positive or best-first ordering can't tell a long prefix from a short one.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gapPenalty", self.gap_penalty),
            ("caseMismatchPenalty", self.case_mismatch_penalty),
            ("segmentStartBonus", self.segment_start_bonus),
            ("unmatchedCharPenalty", self.unmatched_char_penalty),
            ("scopeSkipPenalty", self.scope_skip_penalty),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(Error::InvalidWeights(format!(
                    "{} must be >= 0, got {}",
                    name, value
                )));
            }
            if value > MAX_WEIGHT {
                return Err(Error::InvalidWeights(format!(
                    "{} must be <= {}, got {}",
                    name, MAX_WEIGHT, value
                )));
            }
        }
        if self.unmatched_char_penalty <= 0 {
            return Err(Error::InvalidWeights(format!(
                "unmatchedCharPenalty must be > 0, got {}",
                self.unmatched_char_penalty
            )));
        }
        Ok(())
    }
}

/// Everything a `SearchIndex` needs to know up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub delimiter: String,
    pub weights: ScoringWeights,
    /// Upper bound on segment evaluations per query. `None` = unbounded.
    pub max_visited_nodes: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            delimiter: DELIMITER.to_string(),
            weights: ScoringWeights::default(),
            max_visited_nodes: None,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::EmptyDelimiter);
        }
        self.weights.validate()
    }
}
