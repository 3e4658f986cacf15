//! Remediation tracking errors.

use thiserror::Error;

use crate::item::RemediationStatus;

/// Errors from status transitions and store lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemediationError {
    /// The requested transition moves backwards or leaves a terminal state.
    #[error("invalid remediation transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: RemediationStatus,
        /// Requested status.
        to: RemediationStatus,
    },

    /// No item with this key exists for the tenant.
    #[error("no remediation item {item_key:?} for jurisdiction {jurisdiction_code:?}")]
    NotFound {
        /// Jurisdiction of the missing item.
        jurisdiction_code: String,
        /// Key of the missing item.
        item_key: String,
    },
}
