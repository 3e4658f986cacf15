//! # Seed CLI: Seed remediation checklists for a selection.
//!
//! ```bash
//! hireshield seed -j NYC -j CO --out items.json
//! hireshield seed -j NYC -j CO -j IL --items items.json --out items.json
//! ```
//!
//! Items from `--items` are loaded into the store before seeding. Seeding
//! upserts, so re-running against an existing file adds the checklists of
//! newly selected jurisdictions and keeps every recorded status.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hs_core::TenantId;
use hs_remediation::{
    progress, seed_regulated, ChecklistStore, InMemoryChecklistStore, RemediationItem, SeedReport,
};

use crate::config::Settings;
use crate::evaluate::read_selection;
use crate::progress::read_items;

/// Arguments for `hireshield seed`.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Jurisdiction code. Repeat for several.
    #[arg(short, long = "jurisdiction", value_name = "CODE")]
    pub jurisdictions: Vec<String>,

    /// JSON selection file. Only its jurisdictions are used.
    #[arg(long, value_name = "PATH")]
    pub selection: Option<PathBuf>,

    /// Existing items to carry forward.
    #[arg(long, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Write the items here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Execute `hireshield seed`.
pub fn run_seed(args: &SeedArgs, settings: &Settings) -> Result<u8> {
    let (items, report) = seed_items(args, settings)?;
    let json = serde_json::to_string_pretty(&items)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write items: {}", path.display()))?;
            println!(
                "Seeded {}: {} new, {} refreshed, {} unchanged",
                if report.jurisdictions.is_empty() {
                    "nothing".to_string()
                } else {
                    report.jurisdictions.join(", ")
                },
                report.inserted,
                report.refreshed,
                report.unchanged
            );
            println!("Progress: {}", progress(&items));
        }
        None => println!("{json}"),
    }
    Ok(0)
}

fn seed_items(args: &SeedArgs, settings: &Settings) -> Result<(Vec<RemediationItem>, SeedReport)> {
    let mut selection = read_selection(args.selection.as_ref())?;
    selection.jurisdictions.extend(args.jurisdictions.iter().cloned());

    let store = InMemoryChecklistStore::new();
    let tenant = TenantId::new();
    if let Some(path) = &args.items {
        for item in read_items(path)? {
            store.upsert(tenant, item);
        }
    }

    let report = seed_regulated(
        &store,
        tenant,
        &selection,
        &settings.reference.requirements,
        &settings.reference.checklists,
    );
    tracing::info!(
        inserted = report.inserted,
        refreshed = report.refreshed,
        unchanged = report.unchanged,
        "remediation checklist seeded"
    );
    Ok((store.items(tenant, None), report))
}
