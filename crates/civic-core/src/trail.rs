//! Mutation log envelope.
//!
//! Each line of a session's `.jsonl` file is one [`TrailOperation`]. Lines
//! written before versioning existed carry no `v` and read back as version 1.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, TrailOp};

/// Session label used when no one is signed in (e.g. registration).
pub const ANONYMOUS_SESSION: &str = "anonymous";

pub const TRAIL_VERSION: u32 = 1;

const fn default_trail_version() -> u32 {
    TRAIL_VERSION
}

/// One recorded mutation.
///
/// `data` holds the whole entity for `create` and only the changed fields
/// (or `{from, to}` for status moves) otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    #[serde(default = "default_trail_version")]
    pub v: u32,
    /// RFC 3339 timestamp.
    pub ts: String,
    pub ses: String,
    pub op: TrailOp,
    pub entity: EntityType,
    pub id: String,
    pub data: serde_json::Value,
}

impl TrailOperation {
    #[must_use]
    pub fn new(
        ses: impl Into<String>,
        op: TrailOp,
        entity: EntityType,
        id: impl Into<String>,
        data: serde_json::Value,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            v: TRAIL_VERSION,
            ts: at.to_rfc3339(),
            ses: ses.into(),
            op,
            entity,
            id: id.into(),
            data,
        }
    }

    /// File name holding this session's operations.
    #[must_use]
    pub fn file_name(ses: &str) -> String {
        format!("{ses}.jsonl")
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.ses == ANONYMOUS_SESSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_stamps_current_version() {
        let at = Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap();
        let op = TrailOperation::new(
            "ses-a3f8b2c1",
            TrailOp::Transition,
            EntityType::Issue,
            "iss-deadbeef",
            serde_json::json!({"from": "submitted", "to": "resolved"}),
            at,
        );
        assert_eq!(op.v, TRAIL_VERSION);
        assert_eq!(op.ts, "2026-03-08T12:00:00+00:00");
        assert!(!op.is_anonymous());
    }

    #[test]
    fn missing_version_reads_as_one() {
        let json = r#"{"ts":"2026-01-01T00:00:00Z","ses":"anonymous","op":"create","entity":"user","id":"usr-11111111","data":{}}"#;
        let op: TrailOperation = serde_json::from_str(json).unwrap();
        assert_eq!(op.v, 1);
        assert_eq!(op.entity, EntityType::User);
        assert!(op.is_anonymous());
    }

    #[test]
    fn file_name_is_per_session() {
        assert_eq!(TrailOperation::file_name("ses-00000001"), "ses-00000001.jsonl");
    }
}
