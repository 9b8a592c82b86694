//! Common error types used across the workspace.
//!
//! Each layer defines its failures in terms of these enums and converts via
//! `#[from]`. Errors are terminal for the single operation that raised them:
//! they never corrupt the in-memory document and never crash the process.

use thiserror::Error;

/// Top-level error for every fallible homeport operation.
#[derive(Debug, Error)]
pub enum HomeportError {
    /// A submitted record failed domain validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup by id matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The document store failed to read or write.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// A required field was missing on add or edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The named field was empty after trimming whitespace.
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}

/// An edit referenced an id that does not exist.
#[derive(Debug, Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Human-readable record kind, e.g. `"Service"`.
    pub entity: &'static str,
    /// The id that matched nothing.
    pub id: String,
}

/// The document store failed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the document file failed.
    #[error("document file error")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed.
    #[error("document parse error")]
    Json(#[from] serde_json::Error),
}
