//! # Reference Data Loading
//!
//! Bundles the three reference tables. Deployments that track additional
//! jurisdictions or reword checklist steps supply a YAML file:
//!
//! ```yaml
//! jurisdictions:
//!   - { code: NYC, name: New York City, law: NYC Local Law 144, is_regulated: true }
//! checklists:
//!   NYC:
//!     - { key: bias_audit, label: Complete bias audit, description: ... }
//! documents: []
//! ```
//!
//! Each section is optional. An omitted section falls back to the
//! compiled-in table; a present section replaces it wholesale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checklist::ChecklistTemplates;
use crate::documents::DocumentCatalog;
use crate::error::PackError;
use crate::requirements::RequirementsTable;

/// The complete set of reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Jurisdiction requirements.
    #[serde(default, rename = "jurisdictions")]
    pub requirements: RequirementsTable,
    /// Remediation checklist templates.
    #[serde(default)]
    pub checklists: ChecklistTemplates,
    /// Document types.
    #[serde(default)]
    pub documents: DocumentCatalog,
}

impl ReferenceData {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse reference data from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let data: Self = serde_yaml::from_str(yaml)?;
        data.warn_on_gaps();
        Ok(data)
    }

    /// Load reference data from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Io`] if the file cannot be read and
    /// [`PackError::Parse`] if it is malformed or violates a table invariant
    /// (duplicate codes or keys).
    pub fn load(path: &Path) -> Result<Self, PackError> {
        let content = std::fs::read_to_string(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_yaml_str(&content).map_err(|source| PackError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            jurisdictions = data.requirements.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// Log regulated jurisdictions that have no checklist template. Seeding
    /// for such a jurisdiction produces no items.
    fn warn_on_gaps(&self) {
        for req in self.requirements.regulated() {
            if self.checklists.for_jurisdiction(req.code.as_str()).is_none() {
                tracing::warn!(
                    jurisdiction = %req.code,
                    "regulated jurisdiction has no remediation checklist template"
                );
            }
        }
    }
}
