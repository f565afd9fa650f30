//! Status enums, categories, roles, and trail vocabulary for the portal.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Parsing from user input goes through `FromStr`, which accepts hyphenated
//! aliases (`in-progress`) and is case-insensitive.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

fn invalid(field: &str, raw: &str) -> CoreError {
    CoreError::Validation(format!("invalid {field} '{raw}'"))
}

// ---------------------------------------------------------------------------
// ImpactLevel
// ---------------------------------------------------------------------------

/// Ordinal level shared by issue severity and area importance.
///
/// Both factors feed the priority engine through the same weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Weight contributed to the raw priority score (1..=4).
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Parse form input, returning `None` for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for ImpactLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(invalid("level", s)),
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueCategory
// ---------------------------------------------------------------------------

/// Community service an issue is filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Water,
    Electricity,
    Roads,
    Sanitation,
    Security,
    Health,
    Education,
    Other,
}

impl IssueCategory {
    pub const ALL: [Self; 8] = [
        Self::Water,
        Self::Electricity,
        Self::Roads,
        Self::Sanitation,
        Self::Security,
        Self::Health,
        Self::Education,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Electricity => "electricity",
            Self::Roads => "roads",
            Self::Sanitation => "sanitation",
            Self::Security => "security",
            Self::Health => "health",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown next to the category id.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water Supply",
            Self::Electricity => "Electricity",
            Self::Roads => "Roads & Transportation",
            Self::Sanitation => "Sanitation & Garbage",
            Self::Security => "Security",
            Self::Health => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl FromStr for IssueCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| invalid("category", s))
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueStatus
// ---------------------------------------------------------------------------

/// Status of a reported issue.
///
/// ```text
/// submitted → verified → in_progress → resolved
///           → rejected
///           → reported (flagged by a citizen for admin attention)
/// ```
///
/// Administrators may move an issue to any status; there is no enforced
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Submitted,
    Verified,
    InProgress,
    Resolved,
    Rejected,
    Reported,
}

impl IssueStatus {
    pub const ALL: [Self; 6] = [
        Self::Submitted,
        Self::Verified,
        Self::InProgress,
        Self::Resolved,
        Self::Rejected,
        Self::Reported,
    ];

    /// Whether the issue still counts as pending work on dashboards.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Resolved)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Verified => "verified",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
            Self::Reported => "reported",
        }
    }
}

impl FromStr for IssueStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| invalid("status", s))
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Portal role of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Citizen,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "citizen" => Ok(Self::Citizen),
            "admin" => Ok(Self::Admin),
            _ => Err(invalid("role", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AccountStatus
// ---------------------------------------------------------------------------

/// Whether a user account may sign in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Disabled,
}

impl AccountStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Why an admin notification was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    IssueSubmitted,
    IssueReported,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IssueSubmitted => "issue_submitted",
            Self::IssueReported => "issue_reported",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Type of entity in the system, used in trail records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Issue,
    User,
    Session,
    Notification,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::User => "user",
            Self::Session => "session",
            Self::Notification => "notification",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Operation type recorded in JSONL trail files.
///
/// - Mutation ops: `Create`, `Update`
/// - Status op: `Transition` (manual, bulk, or report)
/// - Interaction ops: `Comment`, `Upvote`
/// - Scoring op: `Recompute`
/// - Session ops: `Login`, `Logout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    Create,
    Update,
    Transition,
    Comment,
    Upvote,
    Recompute,
    Login,
    Logout,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Transition => "transition",
            Self::Comment => "comment",
            Self::Upvote => "upvote",
            Self::Recompute => "recompute",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: IssueStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IssueStatus::InProgress);
    }

    #[test]
    fn status_parses_hyphenated_alias() {
        assert_eq!("in-progress".parse::<IssueStatus>().unwrap(), IssueStatus::InProgress);
        assert_eq!("RESOLVED".parse::<IssueStatus>().unwrap(), IssueStatus::Resolved);
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "done".parse::<IssueStatus>().unwrap_err();
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn only_resolved_is_inactive() {
        for status in IssueStatus::ALL {
            assert_eq!(status.is_active(), status != IssueStatus::Resolved);
        }
    }

    #[test]
    fn impact_weights_are_ordinal() {
        let weights: Vec<u8> = ImpactLevel::ALL.iter().map(|l| l.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3, 4]);
    }

    #[test]
    fn impact_lenient_parse_drops_unknown() {
        assert_eq!(ImpactLevel::parse_lenient("High"), Some(ImpactLevel::High));
        assert_eq!(ImpactLevel::parse_lenient("catastrophic"), None);
        assert_eq!(ImpactLevel::parse_lenient(""), None);
    }

    #[test]
    fn category_roundtrips_through_str() {
        for category in IssueCategory::ALL {
            assert_eq!(category.as_str().parse::<IssueCategory>().unwrap(), category);
        }
    }

    #[test]
    fn role_defaults_to_citizen() {
        assert_eq!(Role::default(), Role::Citizen);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
    }
}
