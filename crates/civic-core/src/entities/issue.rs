use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{ImpactLevel, IssueCategory, IssueStatus};
use crate::identity::SessionUser;
use crate::priority::{self, PriorityFactors, PriorityLabel};

/// Score assumed for records persisted without a `priorityScore`.
const fn default_priority_score() -> u8 {
    5
}

/// Who filed an issue, denormalized onto the record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reporter {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&SessionUser> for Reporter {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A comment left on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: Reporter,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A community service issue reported by a citizen.
///
/// Decoding is lenient about older or hand-edited records: an unknown or
/// missing level reads as `None`, a missing or null score as 5, and a
/// missing `updatedAt` as `createdAt`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: IssueCategory,
    pub location: Option<String>,
    /// `None` when the stored value was missing or unrecognized.
    pub severity: Option<ImpactLevel>,
    pub affected_people: u32,
    pub duration_hours: u32,
    pub area_importance: Option<ImpactLevel>,
    /// Priority: 1 (lowest) to 10 (highest). Frozen at creation.
    pub priority_score: u8,
    pub status: IssueStatus,
    pub reported_by: Option<Reporter>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub upvotes: u32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire shape of a stored issue, before defaults are filled in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIssue {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    category: IssueCategory,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_level")]
    severity: Option<ImpactLevel>,
    #[serde(default)]
    affected_people: u32,
    #[serde(default)]
    duration_hours: u32,
    #[serde(default, deserialize_with = "lenient_level")]
    area_importance: Option<ImpactLevel>,
    #[serde(default)]
    priority_score: Option<u8>,
    status: IssueStatus,
    #[serde(default)]
    reported_by: Option<Reporter>,
    #[serde(default)]
    comments: Vec<Comment>,
    #[serde(default)]
    upvotes: u32,
    #[serde(default)]
    image: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Any non-string or unrecognized level decodes as `None`.
fn lenient_level<'de, D>(deserializer: D) -> Result<Option<ImpactLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(ImpactLevel::parse_lenient))
}

impl From<StoredIssue> for Issue {
    fn from(stored: StoredIssue) -> Self {
        Self {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            category: stored.category,
            location: stored.location,
            severity: stored.severity,
            affected_people: stored.affected_people,
            duration_hours: stored.duration_hours,
            area_importance: stored.area_importance,
            priority_score: stored.priority_score.unwrap_or_else(default_priority_score),
            status: stored.status,
            reported_by: stored.reported_by,
            comments: stored.comments,
            upvotes: stored.upvotes,
            image: stored.image,
            created_at: stored.created_at,
            updated_at: stored.updated_at.unwrap_or(stored.created_at),
        }
    }
}

impl<'de> Deserialize<'de> for Issue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredIssue::deserialize(deserializer).map(Self::from)
    }
}

impl Issue {
    /// The factors the stored score was (or would be) computed from.
    #[must_use]
    pub const fn factors(&self) -> PriorityFactors {
        PriorityFactors {
            severity: self.severity,
            affected_people: self.affected_people,
            duration_hours: self.duration_hours,
            area_importance: self.area_importance,
        }
    }

    /// Display label derived from the stored score. Never persisted.
    #[must_use]
    pub const fn priority_label(&self) -> PriorityLabel {
        priority::label_for_score(self.priority_score)
    }
}

/// Submitted form fields for a new issue, before the store assigns
/// `id`, `status`, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: IssueCategory,
    pub location: Option<String>,
    pub severity: ImpactLevel,
    pub affected_people: u32,
    pub duration_hours: u32,
    pub area_importance: ImpactLevel,
    pub priority_score: u8,
    pub reported_by: Option<Reporter>,
    pub image: Option<String>,
}

impl IssueDraft {
    /// Materialize the draft into a stored record.
    #[must_use]
    pub fn into_issue(self, id: String, now: DateTime<Utc>) -> Issue {
        Issue {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            severity: Some(self.severity),
            affected_people: self.affected_people,
            duration_hours: self.duration_hours,
            area_importance: Some(self.area_importance),
            priority_score: self.priority_score,
            status: IssueStatus::Submitted,
            reported_by: self.reported_by,
            comments: Vec::new(),
            upvotes: 0,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}
