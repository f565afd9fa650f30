//! Service layer orchestrating portal mutations with the JSONL trail.
//!
//! `PortalService` wraps `PortalDb` (keyed record access) and `TrailWriter`
//! (JSONL persistence). All repo methods are implemented as
//! `impl PortalService` in `repos/`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use civic_config::CivicConfig;
use civic_core::enums::{EntityType, TrailOp};
use civic_core::trail::{ANONYMOUS_SESSION, TrailOperation};

use crate::PortalDb;
use crate::error::DatabaseError;
use crate::helpers::to_json;
use crate::trail::writer::TrailWriter;

/// Orchestrates portal mutations with role gating and the JSONL trail.
///
/// Every mutation method follows this protocol:
/// 1. Resolve the signed-in user and check the required role
/// 2. Read, modify, and write back the affected record document
/// 3. Append a trail operation under the current session id
pub struct PortalService {
    db: PortalDb,
    trail: TrailWriter,
    admin_emails: Vec<String>,
}

impl PortalService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `trail_dir` - Directory for JSONL trail files. `None` disables the trail.
    /// * `admin_emails` - Emails that are granted admin access regardless of role.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the trail
    /// directory cannot be created.
    pub async fn new_local(
        db_path: &str,
        trail_dir: Option<PathBuf>,
        admin_emails: Vec<String>,
    ) -> Result<Self, DatabaseError> {
        let db = PortalDb::open_local(db_path).await?;
        let trail = match trail_dir {
            Some(dir) => TrailWriter::new(dir)?,
            None => TrailWriter::disabled(),
        };
        Ok(Self {
            db,
            trail,
            admin_emails,
        })
    }

    /// Open the service described by the loaded configuration.
    ///
    /// Creates the database's parent directory when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory, database, or trail cannot be
    /// created.
    pub async fn from_config(config: &CivicConfig) -> Result<Self, DatabaseError> {
        let storage = &config.storage;
        if !storage.is_in_memory()
            && let Some(parent) = PathBuf::from(&storage.db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::Other(e.into()))?;
        }
        let trail_dir = storage
            .trail_enabled
            .then(|| PathBuf::from(&storage.trail_dir));
        Self::new_local(&storage.db_path, trail_dir, config.access.admin_emails.clone()).await
    }

    /// Create from an existing `PortalDb` (for testing).
    #[must_use]
    pub const fn from_db(db: PortalDb, trail: TrailWriter, admin_emails: Vec<String>) -> Self {
        Self {
            db,
            trail,
            admin_emails,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PortalDb {
        &self.db
    }

    /// Access the trail writer.
    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Emails granted admin access by configuration.
    #[must_use]
    pub fn admin_emails(&self) -> &[String] {
        &self.admin_emails
    }

    /// Append a trail operation attributed to the current session, or to
    /// [`ANONYMOUS_SESSION`] when nobody is signed in.
    pub(crate) async fn record(
        &self,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &(impl Serialize + ?Sized),
        now: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        let ses = self
            .current_session()
            .await?
            .map_or_else(|| ANONYMOUS_SESSION.to_string(), |session| session.id);
        self.record_in(&ses, op, entity, id, data, now)
    }

    /// Trail a mutation whose document write has already committed. A trail
    /// failure here is logged and swallowed so callers never report a
    /// persisted change as failed.
    pub(crate) async fn record_committed(
        &self,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &(impl Serialize + ?Sized),
        now: DateTime<Utc>,
    ) {
        if let Err(error) = self.record(op, entity, id, data, now).await {
            tracing::warn!(%op, %entity, id, %error, "change persisted but not trailed");
        }
    }

    /// Append a trail operation under an explicit session id.
    pub(crate) fn record_in(
        &self,
        ses: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &(impl Serialize + ?Sized),
        now: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.trail
            .append(&TrailOperation::new(ses, op, entity, id, to_json(data)?, now))
    }
}
