//! # Audit Wizard
//!
//! The audit flow asks for jurisdictions, then tools, then usages, then
//! shows results. This module tracks which step the tenant is on and what
//! they have picked. It hands a [`SelectionInput`] to the engine and knows
//! nothing else about scoring.
//!
//! ```text
//! Jurisdictions ──▶ Tools ──▶ Usages ──▶ Results
//!       ◀──────────────◀──────────◀─────────┘ (back)
//! ```
//!
//! Leaving `Jurisdictions` requires at least one selected jurisdiction.
//! The remaining steps may be left empty. A saved wizard is checked against
//! the same rule when it is deserialized.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::SelectionInput;

/// A step of the audit wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStep {
    /// Choose the jurisdictions the tenant hires in.
    Jurisdictions,
    /// Choose the AI tools in use.
    Tools,
    /// Choose how AI influences decisions.
    Usages,
    /// Review the evaluation.
    Results,
}

impl AuditStep {
    /// The following step, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Jurisdictions => Some(Self::Tools),
            Self::Tools => Some(Self::Usages),
            Self::Usages => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// The preceding step, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Jurisdictions => None,
            Self::Tools => Some(Self::Jurisdictions),
            Self::Usages => Some(Self::Tools),
            Self::Results => Some(Self::Usages),
        }
    }

    /// One-based position, for "step 2 of 4" labels.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Jurisdictions => 1,
            Self::Tools => 2,
            Self::Usages => 3,
            Self::Results => 4,
        }
    }
}

impl std::fmt::Display for AuditStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Jurisdictions => "jurisdictions",
            Self::Tools => "tools",
            Self::Usages => "usages",
            Self::Results => "results",
        };
        f.write_str(s)
    }
}

/// Rejected wizard navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Tried to leave the first step with nothing selected.
    #[error("select at least one jurisdiction before continuing")]
    EmptyJurisdictions,

    /// Tried to go back from the first step.
    #[error("already at the first step")]
    AtFirstStep,

    /// Tried to go forward from the last step.
    #[error("already at the results step")]
    AtLastStep,
}

/// Wizard state: current step plus accumulated selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedWizard")]
pub struct AuditWizard {
    step: AuditStep,
    selection: SelectionInput,
}

#[derive(Deserialize)]
struct SavedWizard {
    step: AuditStep,
    #[serde(default)]
    selection: SelectionInput,
}

impl TryFrom<SavedWizard> for AuditWizard {
    type Error = WizardError;

    fn try_from(saved: SavedWizard) -> Result<Self, Self::Error> {
        if saved.step != AuditStep::Jurisdictions && saved.selection.jurisdictions.is_empty() {
            return Err(WizardError::EmptyJurisdictions);
        }
        Ok(Self {
            step: saved.step,
            selection: saved.selection,
        })
    }
}

impl AuditWizard {
    /// Start at the first step with nothing selected.
    pub fn new() -> Self {
        Self {
            step: AuditStep::Jurisdictions,
            selection: SelectionInput::default(),
        }
    }

    /// The current step.
    pub fn step(&self) -> AuditStep {
        self.step
    }

    /// The selection so far.
    pub fn selection(&self) -> &SelectionInput {
        &self.selection
    }

    /// Add or remove a jurisdiction. Returns whether it is now selected.
    ///
    /// Removing the last jurisdiction returns the wizard to the first step.
    pub fn toggle_jurisdiction(&mut self, code: &str) -> bool {
        let selected = toggle(&mut self.selection.jurisdictions, code);
        if self.selection.jurisdictions.is_empty() {
            self.step = AuditStep::Jurisdictions;
        }
        selected
    }

    /// Add or remove a tool. Returns whether it is now selected.
    pub fn toggle_tool(&mut self, tool: &str) -> bool {
        toggle(&mut self.selection.tools, tool)
    }

    /// Add or remove a usage. Returns whether it is now selected.
    pub fn toggle_usage(&mut self, usage: &str) -> bool {
        toggle(&mut self.selection.usages, usage)
    }

    /// Advance one step.
    pub fn next(&mut self) -> Result<AuditStep, WizardError> {
        if self.step == AuditStep::Jurisdictions && self.selection.jurisdictions.is_empty() {
            return Err(WizardError::EmptyJurisdictions);
        }
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        self.step = next;
        Ok(next)
    }

    /// Go back one step. The selection is kept.
    pub fn back(&mut self) -> Result<AuditStep, WizardError> {
        let prev = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// Consume the wizard, yielding the selection for evaluation.
    pub fn into_selection(self) -> SelectionInput {
        self.selection
    }
}

impl Default for AuditWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(list: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
        false
    } else {
        list.push(value.to_string());
        true
    }
}
