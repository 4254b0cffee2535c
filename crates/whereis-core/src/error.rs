// crates/whereis-core/src/error.rs

//! Error types for directory construction and lookups.
//!
//! Resolution misses are *not* errors: [`crate::MatchResult::NotFound`] is a
//! normal value. Everything in [`DirectoryError`] is either fatal at load time
//! or a caller contract violation.

use thiserror::Error;

/// Errors raised while building or querying a [`crate::Directory`].
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Two dataset rows share the same building code (compared case-insensitively).
    #[error("duplicate building code `{code}` in dataset")]
    DuplicateCode { code: String },

    /// A dataset row is structurally valid JSON but violates a record invariant.
    #[error("malformed dataset: {0}")]
    Malformed(String),

    /// `display_name` was called with a code that is not in the directory.
    #[error("unknown building code `{0}`")]
    UnknownCode(String),

    /// The fuzzy threshold is outside `(0.0, 1.0]`.
    #[error("invalid similarity threshold {0}: expected a value in (0.0, 1.0]")]
    InvalidThreshold(f64),

    /// The dataset file could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
