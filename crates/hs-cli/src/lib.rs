//! # hs-cli: Command-Line Front End
//!
//! Provides the `hireshield` binary.
//!
//! ## Subcommands
//!
//! - `hireshield evaluate`: Score a selection and list findings.
//! - `hireshield jurisdictions`: List the requirements table.
//! - `hireshield checklist`: Show a jurisdiction's remediation checklist.
//! - `hireshield seed`: Seed checklists for a selection into an items file.
//! - `hireshield progress`: Summarize completion of remediation items.
//! - `hireshield document`: List and render compliance documents.
//!
//! ```bash
//! hireshield evaluate -j NYC -j CO -u screening --commit
//! hireshield seed -j NYC -j CO --out items.json
//! hireshield progress items.json
//! ```
//!
//! Every subcommand handler returns `anyhow::Result<u8>`; the `u8` is the
//! process exit code.

pub mod checklist;
pub mod config;
pub mod document;
pub mod evaluate;
pub mod jurisdictions;
pub mod progress;
pub mod seed;
