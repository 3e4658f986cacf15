//! Seed remediation items for every regulated jurisdiction in a selection.

use hs_core::TenantId;
use hs_pack::{ChecklistTemplates, RequirementsTable};
use hs_rules::{regulated_jurisdictions, SelectionInput};
use serde::Serialize;

use crate::checklist::build_remediation_checklist;
use crate::store::{ChecklistStore, UpsertOutcome};

/// Counts from one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Jurisdictions that had a template and were seeded.
    pub jurisdictions: Vec<String>,
    /// Regulated jurisdictions with no template.
    pub missing_templates: Vec<String>,
    /// New rows.
    pub inserted: usize,
    /// Existing rows whose text was refreshed.
    pub refreshed: usize,
    /// Existing rows left as they were.
    pub unchanged: usize,
}

/// Upsert the checklist of each regulated jurisdiction in `selection`.
///
/// Unknown and unregulated codes are skipped the same way the engine skips
/// them. A regulated jurisdiction without a template is reported and
/// logged, not treated as an error.
pub fn seed_regulated<S: ChecklistStore + ?Sized>(
    store: &S,
    tenant: TenantId,
    selection: &SelectionInput,
    requirements: &RequirementsTable,
    templates: &ChecklistTemplates,
) -> SeedReport {
    let mut report = SeedReport::default();
    for req in regulated_jurisdictions(selection, requirements) {
        let code = req.code.as_str();
        let Some(template) = templates.for_jurisdiction(code) else {
            tracing::warn!(jurisdiction = code, "no checklist template for regulated jurisdiction");
            report.missing_templates.push(code.to_string());
            continue;
        };
        for item in build_remediation_checklist(code, template) {
            match store.upsert(tenant, item) {
                UpsertOutcome::Inserted => report.inserted += 1,
                UpsertOutcome::Refreshed => report.refreshed += 1,
                UpsertOutcome::Unchanged => report.unchanged += 1,
            }
        }
        report.jurisdictions.push(code.to_string());
    }
    tracing::debug!(
        tenant = %tenant,
        inserted = report.inserted,
        unchanged = report.unchanged,
        "seeded remediation checklist"
    );
    report
}
