//! # Findings
//!
//! A finding is one obligation or risk flag raised for one jurisdiction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a tenant stands against a single obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingStatus {
    /// The obligation is satisfied.
    Compliant,
    /// The obligation is likely unmet or due soon.
    AtRisk,
    /// The obligation is unmet.
    NonCompliant,
}

impl FindingStatus {
    /// The wire identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::AtRisk => "at-risk",
            Self::NonCompliant => "non-compliant",
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compliance finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Display name of the triggering jurisdiction.
    pub jurisdiction: String,
    /// Human-readable description of the obligation.
    pub requirement: String,
    /// Current standing.
    pub status: FindingStatus,
    /// Remediation instruction.
    pub action: String,
}

impl Finding {
    pub(crate) fn new(
        jurisdiction: &str,
        requirement: impl Into<String>,
        status: FindingStatus,
        action: &str,
    ) -> Self {
        Self {
            jurisdiction: jurisdiction.to_string(),
            requirement: requirement.into(),
            status,
            action: action.to_string(),
        }
    }
}
