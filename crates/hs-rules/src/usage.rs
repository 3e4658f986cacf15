//! # High-Risk Usage Sets
//!
//! The product has two definitions of "high-risk" AI usage. The audit page
//! flags screening, ranking, interview analysis, and termination. The
//! onboarding risk calculator also flags assessment scoring and promotion.
//!
//! [`evaluate()`](crate::evaluate) uses [`HighRiskUsages::audit()`]. Callers
//! that want the wider onboarding behaviour pass
//! [`HighRiskUsages::onboarding()`] to [`evaluate_with()`](crate::evaluate_with).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Named usage-set choices, for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageProfile {
    /// The four-member audit set.
    #[default]
    Audit,
    /// The six-member onboarding set.
    Onboarding,
}

/// A set of usage identifiers that trigger the high-risk finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighRiskUsages {
    members: BTreeSet<String>,
}

impl HighRiskUsages {
    /// Build a set from arbitrary identifiers.
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// The audit-page set: `screening`, `ranking`, `interview-analysis`,
    /// `termination`.
    pub fn audit() -> Self {
        Self::new(["screening", "ranking", "interview-analysis", "termination"])
    }

    /// The onboarding set: the audit set plus `assessment-scoring` and
    /// `promotion`.
    pub fn onboarding() -> Self {
        Self::new([
            "screening",
            "ranking",
            "interview-analysis",
            "assessment-scoring",
            "termination",
            "promotion",
        ])
    }

    /// The set for a configuration profile.
    pub fn for_profile(profile: UsageProfile) -> Self {
        match profile {
            UsageProfile::Audit => Self::audit(),
            UsageProfile::Onboarding => Self::onboarding(),
        }
    }

    /// Whether `usage` is high-risk.
    pub fn contains(&self, usage: &str) -> bool {
        self.members.contains(usage)
    }

    /// Whether any of `usages` is high-risk.
    pub fn intersects<S: AsRef<str>>(&self, usages: &[S]) -> bool {
        usages.iter().any(|u| self.contains(u.as_ref()))
    }

    /// Members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}

impl Default for HighRiskUsages {
    fn default() -> Self {
        Self::audit()
    }
}
