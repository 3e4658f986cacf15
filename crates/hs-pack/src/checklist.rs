//! # Remediation Checklist Templates
//!
//! The ordered list of steps that moves a regulated jurisdiction from
//! non-compliant to compliant. Seeding turns each entry into a pending
//! remediation item keyed by `(jurisdiction, key)`, so keys must be unique
//! within a jurisdiction and stable across releases.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// One step of a jurisdiction's remediation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTemplateEntry {
    /// Stable item key, unique within the jurisdiction.
    pub key: String,
    /// Short label shown in the tracker.
    pub label: String,
    /// Longer explanation of what the step requires.
    pub description: String,
    /// Dashboard route where the step is completed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl ChecklistTemplateEntry {
    fn new(key: &str, label: &str, description: &str, route: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            route: route.map(str::to_string),
        }
    }
}

/// Checklist templates keyed by jurisdiction code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<ChecklistTemplateEntry>>",
    into = "BTreeMap<String, Vec<ChecklistTemplateEntry>>"
)]
pub struct ChecklistTemplates {
    by_jurisdiction: BTreeMap<String, Vec<ChecklistTemplateEntry>>,
}

impl ChecklistTemplates {
    /// Build templates, rejecting repeated keys within a jurisdiction.
    pub fn new(
        by_jurisdiction: BTreeMap<String, Vec<ChecklistTemplateEntry>>,
    ) -> Result<Self, PackError> {
        for (jurisdiction, entries) in &by_jurisdiction {
            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.key.as_str()) {
                    return Err(PackError::DuplicateChecklistKey {
                        jurisdiction: jurisdiction.clone(),
                        key: entry.key.clone(),
                    });
                }
            }
        }
        Ok(Self { by_jurisdiction })
    }

    /// The compiled-in templates.
    pub fn builtin() -> Self {
        let mut t = BTreeMap::new();
        t.insert(
            "NYC".to_string(),
            vec![
                ChecklistTemplateEntry::new(
                    "bias_audit",
                    "Complete independent bias audit",
                    "Engage an independent auditor to compute selection rates and impact ratios for each AEDT within the last year.",
                    Some("/dashboard/audit"),
                ),
                ChecklistTemplateEntry::new(
                    "publish_audit_summary",
                    "Publish bias audit summary",
                    "Post the audit date, distribution date of the AEDT, and impact ratios on the employment section of your website.",
                    Some("/dashboard/disclosures"),
                ),
                ChecklistTemplateEntry::new(
                    "candidate_notice",
                    "Send candidate notice",
                    "Notify candidates at least 10 business days before use that an AEDT will be used, with the job qualifications it assesses.",
                    Some("/dashboard/documents"),
                ),
                ChecklistTemplateEntry::new(
                    "alternative_process",
                    "Offer alternative selection process",
                    "Describe how candidates may request an alternative selection process or accommodation.",
                    None,
                ),
                ChecklistTemplateEntry::new(
                    "data_retention_notice",
                    "Disclose data retention policy",
                    "Make the type, source, and retention policy of data collected by the AEDT available on request.",
                    None,
                ),
            ],
        );
        t.insert(
            "CO".to_string(),
            vec![
                ChecklistTemplateEntry::new(
                    "risk_management_policy",
                    "Adopt risk management policy",
                    "Implement a risk management policy and program governing high-risk AI systems used in employment decisions.",
                    Some("/dashboard/documents"),
                ),
                ChecklistTemplateEntry::new(
                    "impact_assessment",
                    "Complete impact assessment",
                    "Complete an impact assessment for each high-risk AI system and review it annually and after substantial modification.",
                    Some("/dashboard/documents"),
                ),
                ChecklistTemplateEntry::new(
                    "consumer_notice",
                    "Notify applicants of AI use",
                    "Notify applicants before a consequential decision is made using a high-risk AI system.",
                    Some("/dashboard/disclosures"),
                ),
                ChecklistTemplateEntry::new(
                    "adverse_decision_process",
                    "Provide adverse decision explanation",
                    "Explain the principal reasons for an adverse decision and offer correction and appeal.",
                    None,
                ),
                ChecklistTemplateEntry::new(
                    "public_statement",
                    "Publish public statement",
                    "Publish a statement summarizing the high-risk AI systems deployed and how discrimination risks are managed.",
                    Some("/dashboard/disclosures"),
                ),
            ],
        );
        t.insert(
            "IL".to_string(),
            vec![
                ChecklistTemplateEntry::new(
                    "employee_notice",
                    "Notify employees and applicants",
                    "Provide notice when AI is used for recruitment, hiring, promotion, discipline, or discharge decisions.",
                    Some("/dashboard/documents"),
                ),
                ChecklistTemplateEntry::new(
                    "zip_code_proxy_review",
                    "Remove zip code proxies",
                    "Confirm AI tools do not use zip codes as a proxy for protected classes.",
                    None,
                ),
                ChecklistTemplateEntry::new(
                    "video_interview_consent",
                    "Collect video interview consent",
                    "Obtain consent before AI analysis of video interviews and explain how the AI evaluates applicants.",
                    Some("/dashboard/consent"),
                ),
            ],
        );
        t.insert(
            "CA".to_string(),
            vec![
                ChecklistTemplateEntry::new(
                    "pre_use_notice",
                    "Provide pre-use notice",
                    "Give a pre-use notice describing the automated decision-making technology and its purpose.",
                    Some("/dashboard/documents"),
                ),
                ChecklistTemplateEntry::new(
                    "opt_out",
                    "Offer opt-out or appeal",
                    "Provide a method to opt out of, or appeal, significant decisions made by automated decision-making technology.",
                    None,
                ),
                ChecklistTemplateEntry::new(
                    "risk_assessment",
                    "Conduct risk assessment",
                    "Conduct and document a risk assessment before using automated decision-making for employment decisions.",
                    Some("/dashboard/audit"),
                ),
            ],
        );
        t.insert(
            "MD".to_string(),
            vec![ChecklistTemplateEntry::new(
                "facial_recognition_consent",
                "Collect facial recognition waiver",
                "Obtain a signed waiver before using facial recognition during pre-employment interviews.",
                Some("/dashboard/consent"),
            )],
        );
        Self { by_jurisdiction: t }
    }

    /// The template for a jurisdiction, or `None` if it has none.
    pub fn for_jurisdiction(&self, code: &str) -> Option<&[ChecklistTemplateEntry]> {
        self.by_jurisdiction.get(code).map(Vec::as_slice)
    }

    /// Jurisdiction codes that have templates.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &str> {
        self.by_jurisdiction.keys().map(String::as_str)
    }
}

impl Default for ChecklistTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<BTreeMap<String, Vec<ChecklistTemplateEntry>>> for ChecklistTemplates {
    type Error = PackError;

    fn try_from(map: BTreeMap<String, Vec<ChecklistTemplateEntry>>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<ChecklistTemplates> for BTreeMap<String, Vec<ChecklistTemplateEntry>> {
    fn from(t: ChecklistTemplates) -> Self {
        t.by_jurisdiction
    }
}
