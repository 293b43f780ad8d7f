// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recoverable errors.
//!
//! Only configuration can fail. Lookups report absence with `Option`, and
//! misuse (foreign ids, stale node handles) panics instead of returning here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
