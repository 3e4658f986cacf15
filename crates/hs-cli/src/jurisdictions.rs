//! # Jurisdictions CLI: List the requirements table.

use anyhow::Result;
use clap::Args;
use hs_pack::RequirementsTable;

use crate::config::Settings;

/// Arguments for `hireshield jurisdictions`.
#[derive(Args, Debug)]
pub struct JurisdictionsArgs {
    /// Only list jurisdictions that currently impose obligations.
    #[arg(long)]
    pub regulated: bool,

    /// Print the table as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `hireshield jurisdictions`.
pub fn run_jurisdictions(args: &JurisdictionsArgs, settings: &Settings) -> Result<u8> {
    let table = &settings.reference.requirements;
    if args.json {
        let rows: Vec<_> = table
            .iter()
            .filter(|r| !args.regulated || r.is_regulated)
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_table(table, args.regulated));
    }
    Ok(0)
}

fn format_table(table: &RequirementsTable, regulated_only: bool) -> String {
    let mut out = String::new();
    let mut shown = 0;
    for req in table.iter().filter(|r| !regulated_only || r.is_regulated) {
        let status = if req.is_regulated { "regulated" } else { "pending" };
        out.push_str(&format!(
            "  {:<6} {:<16} {:<10} {}\n",
            req.code.as_str(),
            req.name,
            status,
            req.law
        ));
        shown += 1;
    }
    out.push_str(&format!("\nTotal: {shown} jurisdictions\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_row() {
        let table = RequirementsTable::builtin();
        let text = format_table(&table, false);
        assert!(text.contains("NYC"));
        assert!(text.contains("NJ"));
        assert!(text.ends_with(&format!("Total: {} jurisdictions\n", table.len())));
    }

    #[test]
    fn regulated_filter_hides_pending() {
        let text = format_table(&RequirementsTable::builtin(), true);
        assert!(text.contains("Colorado AI Act"));
        assert!(!text.contains("pending"));
        assert!(text.ends_with("Total: 5 jurisdictions\n"));
    }
}
