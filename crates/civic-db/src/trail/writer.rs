use std::path::{Path, PathBuf};

use civic_core::trail::TrailOperation;

use crate::error::DatabaseError;

/// Appends mutations to `{dir}/{session}.jsonl`. A writer without a
/// directory drops everything.
#[derive(Debug, Clone, Default)]
pub struct TrailWriter {
    dir: Option<PathBuf>,
}

impl TrailWriter {
    /// Writer rooted at `dir`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&dir).map_err(|e| DatabaseError::Other(e.into()))?;
        Ok(Self { dir: Some(dir) })
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self { dir: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the line cannot be written.
    pub fn append(&self, op: &TrailOperation) -> Result<(), DatabaseError> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };
        let path = dir.join(TrailOperation::file_name(&op.ses));
        serde_jsonlines::append_json_lines(&path, [op])
            .map_err(|e| DatabaseError::Other(e.into()))?;
        tracing::trace!(op = %op.op, entity = %op.entity, id = %op.id, ses = %op.ses, "trail append");
        Ok(())
    }

    /// Every operation recorded for `ses`, oldest first. Empty when the
    /// writer is disabled or the session never wrote anything.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` on I/O failure or a malformed line.
    pub fn read_session(&self, ses: &str) -> Result<Vec<TrailOperation>, DatabaseError> {
        let Some(dir) = &self.dir else {
            return Ok(Vec::new());
        };
        let path = dir.join(TrailOperation::file_name(ses));
        if !path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines::<TrailOperation, _>(&path)
            .and_then(|lines| lines.collect())
            .map_err(|e| DatabaseError::Other(e.into()))
    }
}
