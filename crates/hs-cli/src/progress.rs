//! # Progress CLI: Summarize completion of remediation items.
//!
//! Reads a JSON array of remediation items, as written by
//! `hireshield seed` or `hireshield checklist --json` and updated by
//! whoever works the list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hs_remediation::{progress, progress_by_jurisdiction, Progress, RemediationItem};
use serde::Serialize;

/// Arguments for `hireshield progress`.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// JSON file holding an array of remediation items.
    pub items: PathBuf,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProgressReport {
    overall: Progress,
    by_jurisdiction: BTreeMap<String, Progress>,
}

/// Execute `hireshield progress`.
pub fn run_progress(args: &ProgressArgs) -> Result<u8> {
    let items = read_items(&args.items)?;
    let report = ProgressReport {
        overall: progress(&items),
        by_jurisdiction: progress_by_jurisdiction(&items),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (code, p) in &report.by_jurisdiction {
            println!("  {code:<6} {p}");
        }
        println!("Overall: {}", report.overall);
    }
    Ok(0)
}

/// Read a JSON array of remediation items.
pub(crate) fn read_items(path: &Path) -> Result<Vec<RemediationItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse items: {}", path.display()))
}
