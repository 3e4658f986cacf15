//! # Jurisdiction Requirements Table
//!
//! One [`JurisdictionRequirement`] per jurisdiction the product knows about.
//! Jurisdictions with pending legislation are listed with
//! `is_regulated = false`: they show up in pickers but never produce findings.
//!
//! ## Invariants
//!
//! - Codes are non-empty (enforced by [`JurisdictionCode`]).
//! - Codes are unique across the table (enforced by [`RequirementsTable::new`]).
//! - Row order is preserved; listings follow it.

use std::collections::HashMap;

use hs_core::JurisdictionCode;
use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// A jurisdiction and the statute that governs AI use in hiring there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRequirement {
    /// Short identifier, e.g. "NYC" or "CO".
    pub code: JurisdictionCode,
    /// Display name, e.g. "New York City".
    pub name: String,
    /// Governing statute, e.g. "NYC Local Law 144".
    pub law: String,
    /// Whether the jurisdiction currently imposes obligations.
    #[serde(alias = "isRegulated")]
    pub is_regulated: bool,
}

impl JurisdictionRequirement {
    fn row(code: &str, name: &str, law: &str, is_regulated: bool) -> Option<Self> {
        Some(Self {
            code: JurisdictionCode::new(code).ok()?,
            name: name.to_string(),
            law: law.to_string(),
            is_regulated,
        })
    }
}

/// Immutable lookup table of jurisdiction requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<JurisdictionRequirement>", into = "Vec<JurisdictionRequirement>")]
pub struct RequirementsTable {
    rows: Vec<JurisdictionRequirement>,
    index: HashMap<String, usize>,
}

impl RequirementsTable {
    /// Build a table from rows, rejecting duplicate codes.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicateJurisdiction`] on the first repeated code.
    pub fn new(rows: Vec<JurisdictionRequirement>) -> Result<Self, PackError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.code.as_str().to_string(), i).is_some() {
                return Err(PackError::DuplicateJurisdiction(row.code.to_string()));
            }
        }
        Ok(Self { rows, index })
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        let rows: Vec<JurisdictionRequirement> = [
            ("NYC", "New York City", "NYC Local Law 144", true),
            ("CO", "Colorado", "Colorado AI Act (SB 24-205)", true),
            ("IL", "Illinois", "Illinois HB 3773", true),
            ("CA", "California", "CCPA Automated Decision-Making Regulations", true),
            ("MD", "Maryland", "Maryland HB 1202", true),
            ("NJ", "New Jersey", "New Jersey S1588 (pending)", false),
            ("NY", "New York State", "New York A7859 (pending)", false),
            ("MA", "Massachusetts", "Massachusetts H.1873 (pending)", false),
        ]
        .into_iter()
        .filter_map(|(code, name, law, regulated)| {
            JurisdictionRequirement::row(code, name, law, regulated)
        })
        .collect();

        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            index.insert(row.code.as_str().to_string(), i);
        }
        Self { rows, index }
    }

    /// Look up a jurisdiction by code. Lookup is exact and case-sensitive.
    pub fn get(&self, code: &str) -> Option<&JurisdictionRequirement> {
        self.index.get(code).map(|&i| &self.rows[i])
    }

    /// Whether `code` names a regulated jurisdiction in this table.
    pub fn is_regulated(&self, code: &str) -> bool {
        self.get(code).is_some_and(|r| r.is_regulated)
    }

    /// All rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionRequirement> {
        self.rows.iter()
    }

    /// Regulated rows in table order.
    pub fn regulated(&self) -> impl Iterator<Item = &JurisdictionRequirement> {
        self.rows.iter().filter(|r| r.is_regulated)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for RequirementsTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<JurisdictionRequirement>> for RequirementsTable {
    type Error = PackError;

    fn try_from(rows: Vec<JurisdictionRequirement>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<RequirementsTable> for Vec<JurisdictionRequirement> {
    fn from(table: RequirementsTable) -> Self {
        table.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(code: &str, regulated: bool) -> JurisdictionRequirement {
        JurisdictionRequirement {
            code: JurisdictionCode::new(code).unwrap(),
            name: format!("{code} name"),
            law: format!("{code} law"),
            is_regulated: regulated,
        }
    }

    #[test]
    fn builtin_contains_core_jurisdictions() {
        let table = RequirementsTable::builtin();
        let nyc = table.get("NYC").unwrap();
        assert_eq!(nyc.name, "New York City");
        assert_eq!(nyc.law, "NYC Local Law 144");
        assert!(nyc.is_regulated);
        assert!(table.is_regulated("CO"));
        assert!(table.is_regulated("IL"));
        assert!(table.is_regulated("CA"));
    }

    #[test]
    fn builtin_lists_pending_states_as_unregulated() {
        let table = RequirementsTable::builtin();
        assert!(table.get("NJ").is_some());
        assert!(!table.is_regulated("NJ"));
        assert!(table.get("TX").is_none());
        assert!(!table.is_regulated("TX"));
    }

    #[test]
    fn builtin_codes_are_unique() {
        let table = RequirementsTable::builtin();
        let rebuilt = RequirementsTable::new(table.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt.len(), table.len());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = RequirementsTable::builtin();
        assert!(table.get("nyc").is_none());
    }

    #[test]
    fn duplicate_codes_rejected() {
        let err = RequirementsTable::new(vec![req("CO", true), req("CO", false)]).unwrap_err();
        assert!(matches!(err, PackError::DuplicateJurisdiction(code) if code == "CO"));
    }

    #[test]
    fn regulated_preserves_order() {
        let table =
            RequirementsTable::new(vec![req("B", true), req("X", false), req("A", true)]).unwrap();
        let codes: Vec<&str> = table.regulated().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[test]
    fn deserialize_accepts_camel_case_flag() {
        let json = r#"[{"code":"NYC","name":"New York City","law":"LL144","isRegulated":true}]"#;
        let table: RequirementsTable = serde_json::from_str(json).unwrap();
        assert!(table.is_regulated("NYC"));
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let json = r#"[
            {"code":"CO","name":"Colorado","law":"SB 205","is_regulated":true},
            {"code":"CO","name":"Colorado","law":"SB 205","is_regulated":true}
        ]"#;
        assert!(serde_json::from_str::<RequirementsTable>(json).is_err());
    }

    #[test]
    fn empty_table_is_valid() {
        let table = RequirementsTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.get("NYC").is_none());
    }
}
