use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::IssueStatus;

/// One id that could not be updated, with the reason reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BulkFailure {
    pub id: String,
    pub reason: String,
}

/// Outcome of a bulk status change. Best-effort: no rollback on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BulkUpdateReport {
    pub status: Option<IssueStatus>,
    pub updated: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

impl BulkUpdateReport {
    #[must_use]
    pub fn new(status: IssueStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn updated_count(&self) -> usize {
        self.updated.len()
    }

    #[must_use]
    pub const fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether at least one update failed.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Set `status` on every issue whose id appears in `ids`, refreshing its
/// `updated_at` to `now`.
///
/// Ids with no matching issue are ignored. Duplicate ids update once.
pub fn bulk_update_status<S: AsRef<str>>(
    issues: &mut [Issue],
    ids: &[S],
    status: IssueStatus,
    now: DateTime<Utc>,
) -> BulkUpdateReport {
    let mut report = BulkUpdateReport::new(status);
    for issue in issues.iter_mut() {
        if ids.iter().any(|id| id.as_ref() == issue.id) {
            issue.status = status;
            issue.updated_at = now;
            report.updated.push(issue.id.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::fixtures::{at, issue};
    use crate::enums::IssueCategory::Water;

    #[test]
    fn updates_only_selected_ids() {
        let mut issues = vec![
            issue("id1", Water, 3),
            issue("id2", Water, 3),
            issue("id4", Water, 3),
        ];
        let report = bulk_update_status(&mut issues, &["id1", "id3"], IssueStatus::Resolved, at(5));

        assert_eq!(issues[0].status, IssueStatus::Resolved);
        assert_eq!(issues[0].updated_at, at(5));
        assert_eq!(issues[1].status, IssueStatus::Submitted);
        assert_eq!(issues[1].updated_at, at(1));
        assert_eq!(issues[2].status, IssueStatus::Submitted);
        assert_eq!(report.updated, vec!["id1".to_string()]);
        assert_eq!(report.failure_count(), 0);
        assert!(!report.is_partial());
    }

    #[test]
    fn duplicate_ids_update_once() {
        let mut issues = vec![issue("id1", Water, 3)];
        let report = bulk_update_status(
            &mut issues,
            &["id1".to_string(), "id1".to_string()],
            IssueStatus::Verified,
            at(2),
        );
        assert_eq!(report.updated_count(), 1);
        assert_eq!(issues[0].status, IssueStatus::Verified);
    }

    #[test]
    fn empty_selection_is_a_noop() {
        let mut issues = vec![issue("id1", Water, 3)];
        let before = issues.clone();
        let report = bulk_update_status::<&str>(&mut issues, &[], IssueStatus::Rejected, at(2));
        assert_eq!(issues, before);
        assert_eq!(report.updated_count(), 0);
        assert_eq!(report.status, Some(IssueStatus::Rejected));
    }
}
