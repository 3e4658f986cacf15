//! Errors raised while building or loading reference tables.

use std::path::PathBuf;

use thiserror::Error;

/// Reference data validation and loading errors.
#[derive(Error, Debug)]
pub enum PackError {
    /// Two requirement rows share a jurisdiction code.
    #[error("duplicate jurisdiction code {0:?} in requirements table")]
    DuplicateJurisdiction(String),

    /// A checklist template repeats an item key.
    #[error("duplicate checklist key {key:?} for jurisdiction {jurisdiction:?}")]
    DuplicateChecklistKey {
        /// Jurisdiction whose template is malformed.
        jurisdiction: String,
        /// The repeated key.
        key: String,
    },

    /// Two document types share an identifier.
    #[error("duplicate document type {0:?}")]
    DuplicateDocument(String),

    /// Requested document type does not exist.
    #[error("unknown document type {0:?}")]
    UnknownDocument(String),

    /// Reference data file could not be read.
    #[error("failed to read reference data {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Reference data file is not valid YAML for the expected shape.
    #[error("failed to parse reference data {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}
