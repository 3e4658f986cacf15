//! # Remediation Items
//!
//! ## Status Lifecycle
//!
//! ```text
//! Pending ──▶ InProgress ──▶ Complete (terminal)
//!    └──────────────────────────▲
//! ```
//!
//! Transitions are driven by the person working the checklist; nothing in
//! the engine moves an item on its own. Movement is forward-only. Asserting
//! the current status again is a no-op, so a repeated "mark complete" keeps
//! the first `completed_at`.

use hs_core::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::RemediationError;

/// Progress of one remediation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemediationStatus {
    /// Not started.
    Pending,
    /// Started, not finished.
    InProgress,
    /// Finished (terminal).
    Complete,
}

impl RemediationStatus {
    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Validate a transition, returning the target status.
    ///
    /// # Errors
    ///
    /// Returns [`RemediationError::InvalidTransition`] for backward moves and
    /// for any move out of `Complete`.
    pub fn transition(self, to: Self) -> Result<Self, RemediationError> {
        let allowed = match (self, to) {
            (a, b) if a == b => true,
            (Self::Pending, Self::InProgress)
            | (Self::Pending, Self::Complete)
            | (Self::InProgress, Self::Complete) => true,
            _ => false,
        };
        if allowed {
            Ok(to)
        } else {
            Err(RemediationError::InvalidTransition { from: self, to })
        }
    }
}

impl std::fmt::Display for RemediationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// A trackable remediation step for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationItem {
    /// Jurisdiction the item belongs to.
    pub jurisdiction_code: String,
    /// Template key, unique within the jurisdiction.
    pub item_key: String,
    /// Short label.
    pub item_label: String,
    /// What the step requires.
    pub item_description: String,
    /// Current status.
    pub status: RemediationStatus,
    /// When the item was completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl RemediationItem {
    /// Whether the item is complete.
    pub fn is_complete(&self) -> bool {
        self.status == RemediationStatus::Complete
    }

    /// Move the item to `to`, stamping `completed_at` on first completion.
    pub fn set_status(
        &mut self,
        to: RemediationStatus,
        at: Timestamp,
    ) -> Result<(), RemediationError> {
        let from = self.status;
        self.status = from.transition(to)?;
        if to == RemediationStatus::Complete && from != RemediationStatus::Complete {
            self.completed_at = Some(at);
        }
        Ok(())
    }
}
