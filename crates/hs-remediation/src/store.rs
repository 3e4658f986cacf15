//! # Checklist Store
//!
//! The contract between remediation tracking and whatever persists it.
//! Items are keyed by `(tenant, jurisdiction_code, item_key)`; that triple
//! is unique, and seeding goes through [`ChecklistStore::upsert`] so that
//! running the same seed twice (or two seeds racing) leaves one row per key.
//!
//! Upserting an existing key refreshes its label and description from the
//! template but never touches `status` or `completed_at`. Re-seeding must
//! not wipe progress.

use std::collections::BTreeMap;
use std::sync::Arc;

use hs_core::{TenantId, Timestamp};
use parking_lot::RwLock;

use crate::error::RemediationError;
use crate::item::{RemediationItem, RemediationStatus};

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The key was new.
    Inserted,
    /// The key existed; label or description changed.
    Refreshed,
    /// The key existed with identical text.
    Unchanged,
}

/// Persistence boundary for remediation items.
pub trait ChecklistStore {
    /// Insert an item, or refresh the text of the existing item with the
    /// same key. Status and completion time of an existing item are kept.
    fn upsert(&self, tenant: TenantId, item: RemediationItem) -> UpsertOutcome;

    /// A tenant's items, grouped by jurisdiction code and in insertion order
    /// within each jurisdiction. `jurisdiction` narrows to one code.
    fn items(&self, tenant: TenantId, jurisdiction: Option<&str>) -> Vec<RemediationItem>;

    /// Move one item to a new status.
    ///
    /// # Errors
    ///
    /// [`RemediationError::NotFound`] when no item has this key, and
    /// [`RemediationError::InvalidTransition`] for backward moves.
    fn set_status(
        &self,
        tenant: TenantId,
        jurisdiction_code: &str,
        item_key: &str,
        status: RemediationStatus,
        at: Timestamp,
    ) -> Result<RemediationItem, RemediationError>;
}

type ItemKey = (TenantId, String, String);

#[derive(Debug, Clone)]
struct Row {
    seq: u64,
    item: RemediationItem,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<ItemKey, Row>,
    next_seq: u64,
}

/// Thread-safe, cloneable in-memory [`ChecklistStore`].
///
/// Clones share the same rows. Each operation takes the lock once, so an
/// upsert's existence check and write cannot interleave with another
/// writer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChecklistStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryChecklistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all tenants.
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChecklistStore for InMemoryChecklistStore {
    fn upsert(&self, tenant: TenantId, item: RemediationItem) -> UpsertOutcome {
        let key = (tenant, item.jurisdiction_code.clone(), item.item_key.clone());
        let mut guard = self.inner.write();
        if let Some(row) = guard.rows.get_mut(&key) {
            let existing = &mut row.item;
            if existing.item_label == item.item_label
                && existing.item_description == item.item_description
            {
                return UpsertOutcome::Unchanged;
            }
            existing.item_label = item.item_label;
            existing.item_description = item.item_description;
            return UpsertOutcome::Refreshed;
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.rows.insert(key, Row { seq, item });
        UpsertOutcome::Inserted
    }

    fn items(&self, tenant: TenantId, jurisdiction: Option<&str>) -> Vec<RemediationItem> {
        let guard = self.inner.read();
        let mut rows: Vec<&Row> = guard
            .rows
            .iter()
            .filter(|((t, code, _), _)| {
                *t == tenant && jurisdiction.map_or(true, |j| j == code.as_str())
            })
            .map(|(_, row)| row)
            .collect();
        rows.sort_by(|a, b| {
            a.item
                .jurisdiction_code
                .cmp(&b.item.jurisdiction_code)
                .then(a.seq.cmp(&b.seq))
        });
        rows.into_iter().map(|r| r.item.clone()).collect()
    }

    fn set_status(
        &self,
        tenant: TenantId,
        jurisdiction_code: &str,
        item_key: &str,
        status: RemediationStatus,
        at: Timestamp,
    ) -> Result<RemediationItem, RemediationError> {
        let key = (tenant, jurisdiction_code.to_string(), item_key.to_string());
        let mut guard = self.inner.write();
        let row = guard
            .rows
            .get_mut(&key)
            .ok_or_else(|| RemediationError::NotFound {
                jurisdiction_code: jurisdiction_code.to_string(),
                item_key: item_key.to_string(),
            })?;
        row.item.set_status(status, at)?;
        tracing::debug!(
            tenant = %tenant,
            jurisdiction = jurisdiction_code,
            item = item_key,
            status = %status,
            "remediation status updated"
        );
        Ok(row.item.clone())
    }
}
