//! # Evaluate CLI: Score a jurisdiction/tool/usage selection.
//!
//! ```bash
//! hireshield evaluate --jurisdiction NYC --jurisdiction CO --usage screening
//! hireshield evaluate --selection tenant.json --json --commit
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hs_rules::{evaluate_with, Assessment, SelectionInput};
use serde::Serialize;

use crate::config::Settings;

/// Arguments for `hireshield evaluate`.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Jurisdiction code. Repeat for several.
    #[arg(short, long = "jurisdiction", value_name = "CODE")]
    pub jurisdictions: Vec<String>,

    /// AI tool identifier. Repeat for several.
    #[arg(short, long = "tool", value_name = "ID")]
    pub tools: Vec<String>,

    /// How AI influences decisions, e.g. `screening`. Repeat for several.
    #[arg(short, long = "usage", value_name = "ID")]
    pub usages: Vec<String>,

    /// JSON selection file (`{jurisdictions, tools, usages}`). Flags are
    /// appended to it.
    #[arg(long, value_name = "PATH")]
    pub selection: Option<PathBuf>,

    /// Print the assessment as JSON.
    #[arg(long)]
    pub json: bool,

    /// Include the SHA-256 commitment of the assessment.
    #[arg(long)]
    pub commit: bool,
}

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment: Option<String>,
}

/// Execute `hireshield evaluate`.
pub fn run_evaluate(args: &EvaluateArgs, settings: &Settings) -> Result<u8> {
    let selection = build_selection(args)?;
    let assessment = evaluate_with(&selection, &settings.reference.requirements, &settings.high_risk);
    let commitment = if args.commit {
        let digest = assessment
            .commitment()
            .context("failed to compute assessment commitment")?;
        Some(digest.to_string())
    } else {
        None
    };

    if args.json {
        let out = EvaluateOutput {
            assessment: &assessment,
            commitment,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_assessment(&assessment));
        if let Some(c) = commitment {
            println!("Commitment: {c}");
        }
    }
    Ok(0)
}

/// Read a selection file, or start from an empty selection.
pub(crate) fn read_selection(path: Option<&PathBuf>) -> Result<SelectionInput> {
    let Some(path) = path else {
        return Ok(SelectionInput::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read selection: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse selection: {}", path.display()))
}

fn build_selection(args: &EvaluateArgs) -> Result<SelectionInput> {
    let mut selection = read_selection(args.selection.as_ref())?;
    selection.jurisdictions.extend(args.jurisdictions.iter().cloned());
    selection.tools.extend(args.tools.iter().cloned());
    selection.usages.extend(args.usages.iter().cloned());
    Ok(selection)
}

/// Human-readable rendering of an assessment.
pub fn format_assessment(assessment: &Assessment) -> String {
    let mut out = format!("Risk score: {}/100\n", assessment.risk_score);
    if assessment.is_clear() {
        out.push_str("No findings.\n");
        return out;
    }
    out.push_str(&format!("Findings ({}):\n", assessment.findings.len()));
    for f in &assessment.findings {
        out.push_str(&format!(
            "  [{}] {}: {}\n      -> {}\n",
            f.status, f.jurisdiction, f.requirement, f.action
        ));
    }
    out
}
