//! # Document CLI: List and render compliance documents.
//!
//! ```bash
//! hireshield document list --jurisdiction NYC
//! hireshield document render nyc-aedt-notice \
//!     --var company_name="Acme Corp" --var contact_email=hr@acme.test
//! ```
//!
//! `render` exits with status 2 when the document still has unfilled
//! `{{placeholders}}`. The partial body is still written.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hs_pack::DocumentCatalog;

use crate::config::Settings;

/// Arguments for `hireshield document`.
#[derive(Args, Debug)]
pub struct DocumentArgs {
    #[command(subcommand)]
    pub command: DocumentCommand,
}

/// Document subcommands.
#[derive(Subcommand, Debug)]
pub enum DocumentCommand {
    /// List document types.
    List {
        /// Only documents that apply to this jurisdiction.
        #[arg(long, value_name = "CODE")]
        jurisdiction: Option<String>,
    },

    /// Fill a document template.
    Render {
        /// Document type id, e.g. `nyc-aedt-notice`.
        id: String,

        /// Placeholder value as `name=value`. Repeat for several.
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// Write the body here instead of stdout.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

/// Execute `hireshield document`.
pub fn run_document(args: &DocumentArgs, settings: &Settings) -> Result<u8> {
    let catalog = &settings.reference.documents;
    match &args.command {
        DocumentCommand::List { jurisdiction } => {
            print!("{}", format_list(catalog, jurisdiction.as_deref()));
            Ok(0)
        }
        DocumentCommand::Render { id, vars, out } => run_render(catalog, id, vars, out.as_ref()),
    }
}

fn run_render(
    catalog: &DocumentCatalog,
    id: &str,
    vars: &[(String, String)],
    out: Option<&PathBuf>,
) -> Result<u8> {
    let values: BTreeMap<String, String> = vars.iter().cloned().collect();
    let rendered = catalog.render(id, &values)?;

    match out {
        Some(path) => {
            std::fs::write(path, &rendered.body)
                .with_context(|| format!("failed to write document: {}", path.display()))?;
            tracing::info!(document = id, path = %path.display(), "document written");
        }
        None => print!("{}", rendered.body),
    }

    if rendered.is_complete() {
        Ok(0)
    } else {
        tracing::warn!(
            document = id,
            missing = %rendered.missing.join(", "),
            "document has unfilled placeholders"
        );
        Ok(2)
    }
}

fn format_list(catalog: &DocumentCatalog, jurisdiction: Option<&str>) -> String {
    let docs: Vec<_> = match jurisdiction {
        Some(code) => catalog.for_jurisdiction(code).collect(),
        None => catalog.iter().collect(),
    };
    let mut out = String::new();
    for d in &docs {
        let scope = if d.jurisdictions.is_empty() {
            "all".to_string()
        } else {
            d.jurisdictions.join(", ")
        };
        out.push_str(&format!("  {:<22} {} ({})\n", d.id, d.name, scope));
    }
    out.push_str(&format!("\nTotal: {} documents\n", docs.len()));
    out
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty placeholder name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_splits_on_first_equals() {
        assert_eq!(
            parse_var("formula=a=b").unwrap(),
            ("formula".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_var("x=").unwrap(), ("x".to_string(), String::new()));
    }

    #[test]
    fn parse_var_rejects_malformed() {
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=v").is_err());
    }

    #[test]
    fn list_filters_by_jurisdiction() {
        let catalog = DocumentCatalog::builtin();
        let all = format_list(&catalog, None);
        let nyc = format_list(&catalog, Some("NYC"));
        assert!(all.contains("co-impact-assessment"));
        assert!(nyc.contains("nyc-aedt-notice"));
        assert!(nyc.contains("ai-use-policy"));
        assert!(!nyc.contains("co-impact-assessment"));
    }

    #[test]
    fn render_unknown_document_fails() {
        let catalog = DocumentCatalog::builtin();
        assert!(run_render(&catalog, "nope", &[], None).is_err());
    }

    #[test]
    fn render_reports_missing_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("notice.txt");
        let catalog = DocumentCatalog::builtin();
        let code = run_render(&catalog, "nyc-aedt-notice", &[], Some(&out)).unwrap();
        assert_eq!(code, 2);
        let body = std::fs::read_to_string(&out).unwrap();
        assert!(body.contains("{{"));
    }

    #[test]
    fn render_complete_document_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("policy.txt");
        let catalog = DocumentCatalog::builtin();
        let vars: Vec<(String, String)> = catalog
            .get("ai-use-policy")
            .unwrap()
            .placeholders()
            .into_iter()
            .map(|p| (p.clone(), format!("<{p}>")))
            .collect();
        let code = run_render(&catalog, "ai-use-policy", &vars, Some(&out)).unwrap();
        assert_eq!(code, 0);
        let body = std::fs::read_to_string(&out).unwrap();
        assert!(!body.contains("{{"));
    }
}
