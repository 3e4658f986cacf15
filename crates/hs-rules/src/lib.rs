//! # hs-rules: Compliance Rule Engine
//!
//! Maps a tenant's selection of jurisdictions, tools, and AI usages to a
//! bounded risk score and an ordered list of findings.
//!
//! - **Selection** (`selection.rs`): the caller-supplied input. Arbitrary
//!   strings, possibly empty, possibly mid-wizard.
//! - **Engine** (`engine.rs`): [`evaluate()`], a pure and total function of
//!   the selection and the injected [`RequirementsTable`](hs_pack::RequirementsTable).
//! - **Findings and score** (`finding.rs`, `score.rs`): engine output types.
//! - **Usages** (`usage.rs`): the high-risk usage sets.
//! - **Wizard** (`wizard.rs`): the audit wizard's step machine. It only
//!   builds a [`SelectionInput`]; it never calls the engine.
//!
//! ## Totality
//!
//! The engine has no error type. Unknown jurisdiction codes, unregulated
//! jurisdictions, and unrecognized usages contribute nothing. Incomplete
//! input yields fewer findings, never a failure.

pub mod engine;
pub mod finding;
pub mod score;
pub mod selection;
pub mod usage;
pub mod wizard;

pub use engine::{
    evaluate, evaluate_with, regulated_jurisdictions, Assessment, BASE_INCREMENT,
    HIGH_RISK_INCREMENT,
};
pub use finding::{Finding, FindingStatus};
pub use score::RiskScore;
pub use selection::SelectionInput;
pub use usage::{HighRiskUsages, UsageProfile};
pub use wizard::{AuditStep, AuditWizard, WizardError};
