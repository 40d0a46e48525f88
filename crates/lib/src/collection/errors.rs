//! Error types for path-addressed collection operations.
//!
//! Every variant describes a recoverable outcome. The boolean convenience
//! methods on [`PathMap`](super::PathMap) collapse these into `false`; the
//! `try_*` methods surface them so callers can tell the cases apart.

use thiserror::Error;

/// Structured error types for [`PathMap`](super::PathMap) operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    /// The path was empty
    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    /// A segment along the path does not exist
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// The terminal location is occupied and overwriting was not requested
    #[error("Refusing to overwrite existing value at {path}")]
    OverwriteRefused { path: String },

    /// An intermediate segment holds a scalar, so the path cannot descend further
    #[error("Cannot descend through {segment} at {path}: found {actual}, expected map")]
    NotAMapping {
        path: String,
        segment: String,
        actual: String,
    },

    /// Input text was not valid JSON
    #[error("Failed to parse JSON: {reason}")]
    ParseFailed { reason: String },

    /// Input JSON was valid but its top level is not an object
    #[error("Top-level JSON value must be an object, found {actual}")]
    NotAnObject { actual: String },

    /// A stored value did not have the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl CollectionError {
    /// Check if this error means some segment of the path was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::PathNotFound { .. })
    }

    /// Check if this error came from decoding JSON text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CollectionError::ParseFailed { .. } | CollectionError::NotAnObject { .. }
        )
    }

    /// Check if this error is a refused overwrite
    pub fn is_overwrite_refused(&self) -> bool {
        matches!(self, CollectionError::OverwriteRefused { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CollectionError::TypeMismatch { .. } | CollectionError::NotAMapping { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            CollectionError::PathNotFound { path }
            | CollectionError::OverwriteRefused { path }
            | CollectionError::NotAMapping { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
