//! Preference store error types.
//!
//! None of these reach the user: the preference layer logs them and falls
//! back to built-in defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing stored preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("preference file {path:?} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("preference file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the operation.
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns true if the failure came from the file system.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
