//! # Checklist Construction and Progress
//!
//! Both functions here are pure. Persisting the seeded items is the
//! store's job; see [`crate::store`].

use std::collections::BTreeMap;

use hs_pack::ChecklistTemplateEntry;
use serde::{Deserialize, Serialize};

use crate::item::{RemediationItem, RemediationStatus};

/// One pending item per template entry, in template order.
pub fn build_remediation_checklist(
    jurisdiction_code: &str,
    template: &[ChecklistTemplateEntry],
) -> Vec<RemediationItem> {
    template
        .iter()
        .map(|entry| RemediationItem {
            jurisdiction_code: jurisdiction_code.to_string(),
            item_key: entry.key.clone(),
            item_label: entry.label.clone(),
            item_description: entry.description.clone(),
            status: RemediationStatus::Pending,
            completed_at: None,
        })
        .collect()
}

/// Completion summary for a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Items with status `complete`.
    pub completed: usize,
    /// All items.
    pub total: usize,
    /// `completed / total` as a whole percentage, rounded half up.
    pub percent: u8,
}

impl Progress {
    fn from_counts(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // Integer round-half-up of 100 * c / t.
            let p = (200 * completed + total) / (2 * total);
            u8::try_from(p.min(100)).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Whether every item is complete. An empty set is not done.
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.completed, self.total, self.percent)
    }
}

/// Completion across all items.
pub fn progress(items: &[RemediationItem]) -> Progress {
    let completed = items.iter().filter(|i| i.is_complete()).count();
    Progress::from_counts(completed, items.len())
}

/// Completion per jurisdiction, keyed by code.
pub fn progress_by_jurisdiction(items: &[RemediationItem]) -> BTreeMap<String, Progress> {
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for item in items {
        let entry = counts.entry(item.jurisdiction_code.clone()).or_default();
        entry.1 += 1;
        if item.is_complete() {
            entry.0 += 1;
        }
    }
    counts
        .into_iter()
        .map(|(code, (c, t))| (code, Progress::from_counts(c, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_pack::ChecklistTemplates;

    fn with_status(code: &str, key: &str, status: RemediationStatus) -> RemediationItem {
        RemediationItem {
            jurisdiction_code: code.into(),
            item_key: key.into(),
            item_label: key.into(),
            item_description: String::new(),
            status,
            completed_at: None,
        }
    }

    #[test]
    fn builds_pending_items_in_template_order() {
        let templates = ChecklistTemplates::builtin();
        let template = templates.for_jurisdiction("NYC").unwrap();
        let items = build_remediation_checklist("NYC", template);
        assert_eq!(items.len(), template.len());
        for (item, entry) in items.iter().zip(template) {
            assert_eq!(item.jurisdiction_code, "NYC");
            assert_eq!(item.item_key, entry.key);
            assert_eq!(item.item_label, entry.label);
            assert_eq!(item.status, RemediationStatus::Pending);
            assert!(item.completed_at.is_none());
        }
    }

    #[test]
    fn empty_template_gives_no_items() {
        assert!(build_remediation_checklist("MD", &[]).is_empty());
    }

    #[test]
    fn progress_of_nothing_is_zero() {
        assert_eq!(
            progress(&[]),
            Progress {
                completed: 0,
                total: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn progress_half_done() {
        let items = [
            with_status("NYC", "a", RemediationStatus::Complete),
            with_status("NYC", "b", RemediationStatus::Pending),
        ];
        assert_eq!(
            progress(&items),
            Progress {
                completed: 1,
                total: 2,
                percent: 50
            }
        );
    }

    #[test]
    fn in_progress_does_not_count() {
        let items = [with_status("CO", "a", RemediationStatus::InProgress)];
        assert_eq!(progress(&items).completed, 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        let mut items = vec![
            with_status("IL", "a", RemediationStatus::Complete),
            with_status("IL", "b", RemediationStatus::Pending),
            with_status("IL", "c", RemediationStatus::Pending),
        ];
        assert_eq!(progress(&items).percent, 33);
        items[1].status = RemediationStatus::Complete;
        assert_eq!(progress(&items).percent, 67);

        let eighths: Vec<_> = (0..8)
            .map(|i| {
                let s = if i < 1 {
                    RemediationStatus::Complete
                } else {
                    RemediationStatus::Pending
                };
                with_status("IL", &i.to_string(), s)
            })
            .collect();
        // 12.5 rounds to 13
        assert_eq!(progress(&eighths).percent, 13);
    }

    #[test]
    fn per_jurisdiction_breakdown() {
        let items = [
            with_status("NYC", "a", RemediationStatus::Complete),
            with_status("CO", "a", RemediationStatus::Pending),
            with_status("NYC", "b", RemediationStatus::Complete),
        ];
        let by = progress_by_jurisdiction(&items);
        assert_eq!(by.len(), 2);
        assert!(by["NYC"].is_done());
        assert_eq!(by["NYC"].percent, 100);
        assert_eq!(by["CO"].to_string(), "0/1 (0%)");
    }

    #[test]
    fn empty_is_not_done() {
        assert!(!progress(&[]).is_done());
    }
}
