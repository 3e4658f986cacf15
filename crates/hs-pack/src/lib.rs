//! # hs-pack: Reference Data
//!
//! The immutable tables the rule engine and remediation tracker read:
//!
//! - **Requirements** (`requirements.rs`): one row per jurisdiction with its
//!   governing statute and whether it currently imposes AI-hiring duties.
//!
//! - **Checklists** (`checklist.rs`): the ordered remediation template for
//!   each regulated jurisdiction.
//!
//! - **Documents** (`documents.rs`): disclosure and assessment document
//!   types with `{{placeholder}}` bodies.
//!
//! - **Loader** (`loader.rs`): [`ReferenceData`] bundles the three tables,
//!   either compiled-in or read from a YAML file.
//!
//! Tables are values, never globals. Callers build them once and pass them
//! by reference into the engine, which keeps evaluation pure and testable.

pub mod checklist;
pub mod documents;
pub mod error;
pub mod loader;
pub mod requirements;

pub use checklist::{ChecklistTemplateEntry, ChecklistTemplates};
pub use documents::{DocumentCatalog, DocumentType, RenderedDocument};
pub use error::PackError;
pub use loader::ReferenceData;
pub use requirements::{JurisdictionRequirement, RequirementsTable};
