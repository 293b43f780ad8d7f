// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use namesift::{split_name, Id, SearchConfig, SearchIndex};

use super::display::{
    self, highlight, pad_left, row, section_bot, section_top, timing_ms, use_colors, weight_value,
};

fn load_config(path: Option<&str>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("Failed to load search config {}", path)),
        None => Ok(SearchConfig::default()),
    }
}

/// Build an index from a names file.
///
/// One qualified name per line; the token id is the 1-based line number.
/// Blank lines and lines starting with `#` are skipped.
pub fn load_index(path: &Path, config: SearchConfig) -> Result<SearchIndex> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read names file {}", path.display()))?;
    let mut index = SearchIndex::with_config(config).context("Invalid search config")?;

    let mut names = 0usize;
    for (line_no, line) in text.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }
        let segments = split_name(name, index.delimiter());
        index.insert(&segments, Id(line_no as u32 + 1));
        names += 1;
    }

    debug!(names, nodes = index.node_count(), file = %path.display(), "loaded names");
    Ok(index)
}

pub fn run_search(
    file: &str,
    query: &str,
    limit: usize,
    config: Option<&str>,
    json: bool,
) -> Result<()> {
    let index = load_index(Path::new(file), load_config(config)?)?;

    let start = Instant::now();
    let mut matches = index.run_fuzzy_search_and_get_matches(query);
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    SearchIndex::log_matches(&matches, query);

    let total = matches.len();
    matches.truncate(limit);

    if json {
        let out = serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?;
        println!("{}", out);
        return Ok(());
    }

    let colors = use_colors();
    section_top(&format!("\"{}\"", query));
    if matches.is_empty() {
        row(" no matches");
    }
    for (rank, m) in matches.iter().enumerate() {
        let tokens: Vec<String> = m.token_ids.iter().map(|id| id.to_string()).collect();
        row(&format!(
            " {} {} {}  {}",
            pad_left(&(rank + 1).to_string(), 3),
            pad_left(&weight_value(m.weight), 4),
            highlight(m, colors),
            display::themed(display::GRAY, &[], &format!("[{}]", tokens.join(", ")))
        ));
    }
    row(&format!(
        " {} of {} matches in {}",
        matches.len(),
        total,
        timing_ms(elapsed)
    ));
    section_bot();
    Ok(())
}

pub fn run_lookup(file: &str, name: &str, config: Option<&str>) -> Result<()> {
    let index = load_index(Path::new(file), load_config(config)?)?;

    let node = index
        .get_node(name)
        .with_context(|| format!("No such name: {}", name))?;
    let node = index.node(node);

    if node.is_structural() {
        println!("{} (scope, no tokens)", node.full_name());
        return Ok(());
    }
    let tokens: Vec<String> = node.token_ids().iter().map(|id| id.to_string()).collect();
    println!("{}\t{}", node.full_name(), tokens.join(" "));
    Ok(())
}
