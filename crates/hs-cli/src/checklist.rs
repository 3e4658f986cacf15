//! # Checklist CLI: Show the remediation checklist for a jurisdiction.
//!
//! Prints the pending items seeding would create. The output of
//! `--json` is the input format of `hireshield progress`.

use anyhow::{bail, Result};
use clap::Args;
use hs_pack::ReferenceData;
use hs_remediation::{build_remediation_checklist, RemediationItem};

use crate::config::Settings;

/// Arguments for `hireshield checklist`.
#[derive(Args, Debug)]
pub struct ChecklistArgs {
    /// Jurisdiction code, e.g. NYC.
    pub jurisdiction: String,

    /// Print the items as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `hireshield checklist`.
pub fn run_checklist(args: &ChecklistArgs, settings: &Settings) -> Result<u8> {
    let items = checklist_for(&settings.reference, &args.jurisdiction)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(0);
    }
    if items.is_empty() {
        println!("{} imposes no obligations; nothing to remediate.", args.jurisdiction);
        return Ok(0);
    }
    for (i, item) in items.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, item.item_key, item.item_label);
        println!("       {}", item.item_description);
    }
    Ok(0)
}

/// Items for one jurisdiction. Unregulated jurisdictions have none.
fn checklist_for(reference: &ReferenceData, code: &str) -> Result<Vec<RemediationItem>> {
    let Some(req) = reference.requirements.get(code) else {
        bail!("unknown jurisdiction '{code}'");
    };
    if !req.is_regulated {
        return Ok(Vec::new());
    }
    match reference.checklists.for_jurisdiction(code) {
        Some(template) => Ok(build_remediation_checklist(code, template)),
        None => bail!("no checklist template for regulated jurisdiction '{code}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_remediation::RemediationStatus;

    #[test]
    fn regulated_jurisdiction_has_pending_items() {
        let items = checklist_for(&ReferenceData::builtin(), "CO").unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.status == RemediationStatus::Pending));
        assert!(items.iter().any(|i| i.item_key == "impact_assessment"));
    }

    #[test]
    fn unregulated_jurisdiction_is_empty() {
        assert!(checklist_for(&ReferenceData::builtin(), "NJ").unwrap().is_empty());
    }

    #[test]
    fn unknown_jurisdiction_is_an_error() {
        let err = checklist_for(&ReferenceData::builtin(), "TX").unwrap_err();
        assert!(err.to_string().contains("unknown jurisdiction 'TX'"));
    }

    #[test]
    fn code_lookup_is_case_sensitive() {
        assert!(checklist_for(&ReferenceData::builtin(), "nyc").is_err());
    }
}
