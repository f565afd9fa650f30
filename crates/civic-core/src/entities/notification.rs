use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// An admin-facing notification raised by issue activity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub issue_id: String,
    pub title: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}
