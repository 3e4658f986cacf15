//! # hireshield CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hs_cli::checklist::{run_checklist, ChecklistArgs};
use hs_cli::config::Settings;
use hs_cli::document::{run_document, DocumentArgs};
use hs_cli::evaluate::{run_evaluate, EvaluateArgs};
use hs_cli::jurisdictions::{run_jurisdictions, JurisdictionsArgs};
use hs_cli::progress::{run_progress, ProgressArgs};
use hs_cli::seed::{run_seed, SeedArgs};

/// HireShield AI-hiring compliance engine.
///
/// Scores a tenant's jurisdiction, tool, and usage selection against
/// AI-hiring laws, and tracks the remediation work that follows.
#[derive(Parser, Debug)]
#[command(name = "hireshield", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference-data YAML replacing the built-in tables.
    #[arg(long, global = true)]
    reference: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a selection and list findings.
    Evaluate(EvaluateArgs),

    /// List known jurisdictions and their governing laws.
    Jurisdictions(JurisdictionsArgs),

    /// Show the remediation checklist for a jurisdiction.
    Checklist(ChecklistArgs),

    /// Seed remediation checklists for a selection.
    Seed(SeedArgs),

    /// Summarize completion of remediation items.
    Progress(ProgressArgs),

    /// List and render compliance documents.
    Document(DocumentArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::resolve(cli.config.as_deref(), cli.reference.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args, &settings),
        Commands::Jurisdictions(args) => run_jurisdictions(&args, &settings),
        Commands::Checklist(args) => run_checklist(&args, &settings),
        Commands::Seed(args) => run_seed(&args, &settings),
        Commands::Progress(args) => run_progress(&args),
        Commands::Document(args) => run_document(&args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_cli::document::DocumentCommand;

    #[test]
    fn cli_parse_evaluate_repeated_flags() {
        let cli = Cli::try_parse_from([
            "hireshield",
            "evaluate",
            "--jurisdiction",
            "NYC",
            "-j",
            "CO",
            "--usage",
            "screening",
            "--tool",
            "hirevue",
            "--commit",
        ])
        .unwrap();
        if let Commands::Evaluate(args) = cli.command {
            assert_eq!(args.jurisdictions, vec!["NYC", "CO"]);
            assert_eq!(args.usages, vec!["screening"]);
            assert_eq!(args.tools, vec!["hirevue"]);
            assert!(args.commit);
            assert!(!args.json);
        } else {
            panic!("expected evaluate");
        }
    }

    #[test]
    fn cli_parse_evaluate_empty_selection() {
        let cli = Cli::try_parse_from(["hireshield", "evaluate"]).unwrap();
        if let Commands::Evaluate(args) = cli.command {
            assert!(args.jurisdictions.is_empty());
            assert!(args.selection.is_none());
        } else {
            panic!("expected evaluate");
        }
    }

    #[test]
    fn cli_parse_checklist_requires_code() {
        assert!(Cli::try_parse_from(["hireshield", "checklist"]).is_err());
        let cli = Cli::try_parse_from(["hireshield", "checklist", "NYC", "--json"]).unwrap();
        if let Commands::Checklist(args) = cli.command {
            assert_eq!(args.jurisdiction, "NYC");
            assert!(args.json);
        } else {
            panic!("expected checklist");
        }
    }

    #[test]
    fn cli_parse_seed() {
        let cli = Cli::try_parse_from([
            "hireshield",
            "seed",
            "-j",
            "NYC",
            "--jurisdiction",
            "IL",
            "--items",
            "items.json",
            "--out",
            "items.json",
        ])
        .unwrap();
        let Commands::Seed(args) = cli.command else {
            panic!("expected seed");
        };
        assert_eq!(args.jurisdictions, vec!["NYC", "IL"]);
        assert_eq!(args.items, Some(PathBuf::from("items.json")));
        assert_eq!(args.out, Some(PathBuf::from("items.json")));
        assert!(args.selection.is_none());
    }

    #[test]
    fn cli_parse_progress() {
        let cli = Cli::try_parse_from(["hireshield", "progress", "items.json"]).unwrap();
        if let Commands::Progress(args) = cli.command {
            assert_eq!(args.items, PathBuf::from("items.json"));
        } else {
            panic!("expected progress");
        }
    }

    #[test]
    fn cli_parse_document_render_vars() {
        let cli = Cli::try_parse_from([
            "hireshield",
            "document",
            "render",
            "nyc-aedt-notice",
            "--var",
            "company_name=Acme Corp",
            "--var",
            "tool_name=Screener",
        ])
        .unwrap();
        let Commands::Document(args) = cli.command else {
            panic!("expected document");
        };
        let DocumentCommand::Render { id, vars, out } = args.command else {
            panic!("expected render");
        };
        assert_eq!(id, "nyc-aedt-notice");
        assert_eq!(
            vars,
            vec![
                ("company_name".to_string(), "Acme Corp".to_string()),
                ("tool_name".to_string(), "Screener".to_string()),
            ]
        );
        assert!(out.is_none());
    }

    #[test]
    fn cli_parse_document_render_bad_var() {
        let result = Cli::try_parse_from([
            "hireshield",
            "document",
            "render",
            "ai-use-policy",
            "--var",
            "company_name",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_document_list_filter() {
        let cli = Cli::try_parse_from(["hireshield", "document", "list", "--jurisdiction", "CO"])
            .unwrap();
        let Commands::Document(args) = cli.command else {
            panic!("expected document");
        };
        assert!(matches!(
            args.command,
            DocumentCommand::List { jurisdiction: Some(ref j) } if j == "CO"
        ));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["hireshield", "jurisdictions"]).unwrap();
        assert_eq!(cli0.verbose, 0);
        let cli2 = Cli::try_parse_from(["hireshield", "-vv", "jurisdictions"]).unwrap();
        assert_eq!(cli2.verbose, 2);
        let cli3 = Cli::try_parse_from(["hireshield", "jurisdictions", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_global_paths() {
        let cli = Cli::try_parse_from([
            "hireshield",
            "--config",
            "hireshield.yaml",
            "jurisdictions",
            "--reference",
            "ref.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("hireshield.yaml")));
        assert_eq!(cli.reference, Some(PathBuf::from("ref.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["hireshield"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["hireshield", "nonexistent"]).is_err());
    }
}
