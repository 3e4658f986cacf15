//! # Rule Evaluation
//!
//! ## Algorithm
//!
//! For each jurisdiction code in the selection, in input order:
//!
//! 1. Skip the code if the table does not know it or it is unregulated.
//! 2. Add [`BASE_INCREMENT`] and emit the disclosure finding.
//! 3. Emit jurisdiction-specific findings: Colorado's impact assessment,
//!    New York City's annual bias audit.
//! 4. If any selected usage is high-risk, add [`HIGH_RISK_INCREMENT`] and
//!    emit the usage finding. This repeats for every regulated jurisdiction.
//!
//! The total is clamped to 100.
//!
//! A code repeated in the selection is evaluated once, at its first
//! position. Selections are sets in the product; a repeated code is a
//! double-submitted toggle, not a second jurisdiction.

use std::collections::HashSet;

use hs_core::{sha256_digest, CanonicalBytes, CanonicalizationError, ContentDigest};
use hs_pack::{JurisdictionRequirement, RequirementsTable};
use serde::{Deserialize, Serialize};

use crate::finding::{Finding, FindingStatus};
use crate::score::RiskScore;
use crate::selection::SelectionInput;
use crate::usage::HighRiskUsages;

/// Score added for every regulated jurisdiction in the selection.
pub const BASE_INCREMENT: u32 = 20;

/// Score added per regulated jurisdiction when a high-risk usage is selected.
pub const HIGH_RISK_INCREMENT: u32 = 15;

const DISCLOSURE_ACTION: &str = "Generate disclosure notice for candidates/employees";
const IMPACT_ASSESSMENT_REQUIREMENT: &str = "Impact Assessment Required";
const IMPACT_ASSESSMENT_ACTION: &str = "Complete impact assessment template";
const BIAS_AUDIT_REQUIREMENT: &str = "Annual Bias Audit Required";
const BIAS_AUDIT_ACTION: &str = "Schedule bias audit with independent auditor";
const HIGH_RISK_REQUIREMENT: &str = "High-risk AI usage detected";
const HIGH_RISK_ACTION: &str = "Review AI usage for potential discrimination";

/// The result of evaluating a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Bounded risk score.
    pub risk_score: RiskScore,
    /// Findings in emission order.
    pub findings: Vec<Finding>,
}

impl Assessment {
    /// Number of findings with the given status.
    pub fn count(&self, status: FindingStatus) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }

    /// Whether the selection raised nothing.
    pub fn is_clear(&self) -> bool {
        self.findings.is_empty()
    }

    /// SHA-256 digest of the assessment's canonical JSON.
    ///
    /// Two assessments have the same commitment exactly when they have the
    /// same score and the same findings in the same order.
    pub fn commitment(&self) -> Result<ContentDigest, CanonicalizationError> {
        let cb = CanonicalBytes::new(self)?;
        Ok(sha256_digest(&cb))
    }
}

/// Evaluate a selection with the audit high-risk usage set.
pub fn evaluate(selection: &SelectionInput, requirements: &RequirementsTable) -> Assessment {
    evaluate_with(selection, requirements, &HighRiskUsages::audit())
}

/// Evaluate a selection with an explicit high-risk usage set.
pub fn evaluate_with(
    selection: &SelectionInput,
    requirements: &RequirementsTable,
    high_risk: &HighRiskUsages,
) -> Assessment {
    let uses_high_risk = high_risk.intersects(&selection.usages);
    let mut total: u32 = 0;
    let mut findings = Vec::new();

    for req in regulated_jurisdictions(selection, requirements) {
        total = total.saturating_add(BASE_INCREMENT);
        findings.push(Finding::new(
            &req.name,
            format!("{} - Disclosure Required", req.law),
            FindingStatus::NonCompliant,
            DISCLOSURE_ACTION,
        ));

        match req.code.as_str() {
            "CO" => findings.push(Finding::new(
                &req.name,
                IMPACT_ASSESSMENT_REQUIREMENT,
                FindingStatus::NonCompliant,
                IMPACT_ASSESSMENT_ACTION,
            )),
            "NYC" => findings.push(Finding::new(
                &req.name,
                BIAS_AUDIT_REQUIREMENT,
                FindingStatus::AtRisk,
                BIAS_AUDIT_ACTION,
            )),
            _ => {}
        }

        if uses_high_risk {
            total = total.saturating_add(HIGH_RISK_INCREMENT);
            findings.push(Finding::new(
                &req.name,
                HIGH_RISK_REQUIREMENT,
                FindingStatus::AtRisk,
                HIGH_RISK_ACTION,
            ));
        }
    }

    let risk_score = RiskScore::saturating_from(total);
    tracing::debug!(
        risk_score = risk_score.value(),
        findings = findings.len(),
        "evaluated selection"
    );
    Assessment {
        risk_score,
        findings,
    }
}

/// The regulated jurisdictions of a selection, in selection order, each at
/// most once. Unknown and unregulated codes are skipped.
pub fn regulated_jurisdictions<'t>(
    selection: &SelectionInput,
    requirements: &'t RequirementsTable,
) -> Vec<&'t JurisdictionRequirement> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for code in &selection.jurisdictions {
        if !seen.insert(code.as_str()) {
            continue;
        }
        match requirements.get(code) {
            Some(req) if req.is_regulated => out.push(req),
            Some(_) => tracing::debug!(jurisdiction = %code, "jurisdiction not regulated, skipping"),
            None => tracing::debug!(jurisdiction = %code, "unknown jurisdiction code, skipping"),
        }
    }
    out
}
