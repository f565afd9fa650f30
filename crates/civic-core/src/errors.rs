//! Cross-cutting error types for the portal.
//!
//! Storage errors (`DatabaseError`) live in `civic-db` and configuration
//! errors in `civic-config`. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any portal crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints, unknown enum value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness constraint would be violated (e.g. duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The current user lacks the role required for an operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
