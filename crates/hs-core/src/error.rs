//! # Error Types
//!
//! Error types shared across the workspace. All errors use `thiserror`.
//!
//! The rule engine itself has no error path: it is total over its input.
//! Errors only arise at the edges, when reference data is validated or
//! loaded, when timestamps are parsed, and when commitments are computed.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation failures for identifier and timestamp construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction code was empty or whitespace-only.
    #[error("jurisdiction code must not be empty")]
    EmptyJurisdictionCode,

    /// Timestamp string could not be parsed or was not UTC.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rejection_names_value() {
        let err = CanonicalizationError::FloatRejected(0.5);
        assert!(err.to_string().starts_with("float values are not permitted"));
        assert!(err.to_string().ends_with("0.5"));
    }

    #[test]
    fn empty_code_message() {
        assert_eq!(
            ValidationError::EmptyJurisdictionCode.to_string(),
            "jurisdiction code must not be empty"
        );
    }

    #[test]
    fn invalid_timestamp_message_quotes_input() {
        let err = ValidationError::InvalidTimestamp {
            value: "yesterday".into(),
            reason: "not RFC 3339".into(),
        };
        assert_eq!(err.to_string(), "invalid timestamp \"yesterday\": not RFC 3339");
    }
}
