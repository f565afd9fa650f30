//! Keyed JSON document access over the `records` table.
//!
//! Each key holds one document. Collections (`issues`, `users`,
//! `notifications`) are stored as JSON arrays; `session` holds a single
//! object and is deleted on sign-out.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::PortalDb;
use crate::error::DatabaseError;
use crate::helpers::{decode_document, parse_datetime};

pub const KEY_ISSUES: &str = "issues";
pub const KEY_USERS: &str = "users";
pub const KEY_NOTIFICATIONS: &str = "notifications";
pub const KEY_SESSION: &str = "session";

impl PortalDb {
    /// Read the raw JSON text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT value FROM records WHERE key = ?1", [key])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// Read and decode the document under `key`. Missing keys yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if the stored JSON does not decode as `T`.
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, DatabaseError> {
        match self.get_raw(key).await? {
            Some(raw) => Ok(Some(decode_document(key, &raw)?)),
            None => Ok(None),
        }
    }

    /// Read a collection document. A missing key is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if the stored JSON is not an array of `T`.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, DatabaseError> {
        Ok(self.get_document(key).await?.unwrap_or_default())
    }

    /// Encode and store `value` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or the upsert fails.
    pub async fn put_document<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), DatabaseError> {
        let raw = serde_json::to_string(value).map_err(|e| DatabaseError::Other(e.into()))?;
        self.conn()
            .execute(
                "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                libsql::params![key, raw, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(())
    }

    /// Remove the document under `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_document(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM records WHERE key = ?1", [key])
            .await?;
        Ok(())
    }

    /// When the document under `key` was last written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the timestamp is malformed.
    pub async fn last_written(&self, key: &str) -> Result<Option<DateTime<Utc>>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT updated_at FROM records WHERE key = ?1", [key])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_datetime(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }
}
