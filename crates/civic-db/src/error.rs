//! Database error types for civic-db.

use thiserror::Error;

/// Errors from store and service operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or a stored document could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// No record with the given id.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A uniqueness rule would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation needs a signed-in user.
    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    /// The signed-in user may not perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid state encountered (e.g., an operation that makes no sense for
    /// the record's current state).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
