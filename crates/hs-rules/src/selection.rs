//! # Selection Input
//!
//! What the tenant has picked so far. Every field may be empty and may hold
//! codes the reference tables do not know; the engine ignores those.

use serde::{Deserialize, Serialize};

/// A tenant's jurisdiction, tool, and usage selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    /// Jurisdiction codes in the order the tenant selected them.
    #[serde(default)]
    pub jurisdictions: Vec<String>,
    /// Tool identifiers.
    #[serde(default)]
    pub tools: Vec<String>,
    /// Usage-category identifiers describing how AI influences decisions.
    #[serde(default)]
    pub usages: Vec<String>,
}

impl SelectionInput {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the jurisdiction list.
    pub fn with_jurisdictions<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jurisdictions = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the tool list.
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the usage list.
    pub fn with_usages<I, S>(mut self, usages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usages = usages.into_iter().map(Into::into).collect();
        self
    }

    /// Whether nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty() && self.tools.is_empty() && self.usages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let s = SelectionInput::new()
            .with_jurisdictions(["NYC", "CO"])
            .with_tools(vec!["hirevue".to_string()])
            .with_usages(["screening"]);
        assert_eq!(s.jurisdictions, vec!["NYC", "CO"]);
        assert_eq!(s.tools, vec!["hirevue"]);
        assert_eq!(s.usages, vec!["screening"]);
        assert!(!s.is_empty());
    }

    #[test]
    fn partial_json_deserializes() {
        let s: SelectionInput = serde_json::from_str(r#"{"jurisdictions":["IL"]}"#).unwrap();
        assert_eq!(s.jurisdictions, vec!["IL"]);
        assert!(s.tools.is_empty());
        assert!(s.usages.is_empty());
    }

    #[test]
    fn empty_object_is_empty_selection() {
        let s: SelectionInput = serde_json::from_str("{}").unwrap();
        assert!(s.is_empty());
    }
}
