// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;

mod cli;
use cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Explicit flags win over RUST_LOG
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("error")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries results only
        .init();

    match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            config,
            json,
        } => commands::run_search(&file, &query, limit, config.as_deref(), json),
        Commands::Lookup { file, name, config } => {
            commands::run_lookup(&file, &name, config.as_deref())
        }
    }
}
