//! # civic-db
//!
//! libSQL-backed persistence and service layer for the civic issue portal.
//!
//! Portal state lives in a single `records` table holding one JSON document
//! per key (`issues`, `users`, `notifications`, `session`). `PortalDb` owns
//! the connection and the keyed document access; `PortalService` layers the
//! portal operations on top, gating by role and appending every mutation to
//! the JSONL trail.

pub mod bulk;
pub mod error;
pub mod helpers;
mod migrations;
pub mod records;
pub mod repos;
pub mod service;
pub mod store;
pub mod trail;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all portal state.
///
/// Wraps a libSQL database and connection. Provides ID generation and the
/// keyed record access used by the repos.
pub struct PortalDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PortalDb {
    /// Open a local database at the given path, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let portal_db = Self { db, conn };
        portal_db.run_migrations().await?;
        tracing::debug!(path, "opened portal database");
        Ok(portal_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"iss-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(4)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let suffix = row.get::<String>(0)?;
        Ok(civic_core::ids::format_id(prefix, &suffix))
    }
}
