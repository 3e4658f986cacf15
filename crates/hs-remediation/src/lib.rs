//! # hs-remediation: Remediation Tracking
//!
//! Turns findings into trackable work:
//!
//! - **Items** (`item.rs`): [`RemediationItem`] and its forward-only status
//!   lifecycle `Pending → InProgress → Complete`.
//! - **Checklist** (`checklist.rs`): [`build_remediation_checklist()`] seeds
//!   pending items from a template; [`progress()`] counts completion.
//! - **Store** (`store.rs`): the [`ChecklistStore`] contract with the
//!   persistence layer. Seeding is an upsert keyed by
//!   `(tenant, jurisdiction, item_key)`, so re-running it is harmless.
//!   [`InMemoryChecklistStore`] is the reference implementation.
//! - **Seeding** (`seed.rs`): [`seed_regulated()`] seeds every regulated
//!   jurisdiction of a selection.

pub mod checklist;
pub mod error;
pub mod item;
pub mod seed;
pub mod store;

pub use checklist::{build_remediation_checklist, progress, progress_by_jurisdiction, Progress};
pub use error::RemediationError;
pub use item::{RemediationItem, RemediationStatus};
pub use seed::{seed_regulated, SeedReport};
pub use store::{ChecklistStore, InMemoryChecklistStore, UpsertOutcome};
