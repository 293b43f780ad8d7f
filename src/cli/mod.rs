// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the namesift command-line interface.
//!
//! Two subcommands over a plain-text names file: `search` runs a fuzzy query
//! and prints ranked, highlighted matches; `lookup` resolves one exact name to
//! its token ids. The names file is rebuilt into an index on every run.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "namesift",
    about = "Fuzzy search over hierarchical names",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy search a names file and display ranked matches
    Search {
        /// File with one qualified name per line
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON search config (delimiter, weights, node budget)
        #[arg(short, long)]
        config: Option<String>,

        /// Print matches as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up the token ids of one exact qualified name
    Lookup {
        /// File with one qualified name per line
        file: String,

        /// Qualified name, e.g. `std::vec::Vec`
        name: String,

        /// JSON search config (only the delimiter matters here)
        #[arg(short, long)]
        config: Option<String>,
    },
}
