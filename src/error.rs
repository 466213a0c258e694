//! Error types for path containment operations

use thiserror::Error;

/// The error type for path containment operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The candidate path resolves outside of its parent directory
    #[error("Path slip detected: {candidate} is outside of the parent dir {parent}")]
    Slip { parent: String, candidate: String },

    /// Empty or whitespace-only entry name
    #[error("Empty paths are not allowed")]
    EmptyPath,
}

impl PathError {
    /// Whether this error is a containment (zip-slip) violation.
    ///
    /// Callers extracting archives must abort the current entry on a slip
    /// rather than retrying it.
    pub fn is_slip(&self) -> bool {
        matches!(self, PathError::Slip { .. })
    }
}

/// Result type for path containment operations
pub type Result<T> = std::result::Result<T, PathError>;
