//! Dashboard statistics over the issue and user collections.

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::IssueStatus;
use crate::priority::PriorityBand;

/// Issue counts per priority band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

/// Issue counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub submitted: usize,
    pub verified: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rejected: usize,
    pub reported: usize,
}

/// Admin analytics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PortalStats {
    pub total_issues: usize,
    pub resolved_issues: usize,
    pub pending_issues: usize,
    /// Percentage of all issues resolved within the response window.
    pub response_rate: u32,
    pub total_users: usize,
    pub by_status: StatusCounts,
    pub by_band: BandCounts,
}

/// Compute the analytics summary at `now`.
///
/// An issue counts toward the response rate when it is resolved and its last
/// update falls within `response_window_days` of `now`.
#[must_use]
pub fn compute_stats(
    issues: &[Issue],
    total_users: usize,
    response_window_days: u32,
    now: DateTime<Utc>,
) -> PortalStats {
    let window = Duration::days(i64::from(response_window_days));

    let mut by_status = StatusCounts::default();
    let mut by_band = BandCounts::default();
    let mut recent_resolved = 0usize;

    for issue in issues {
        match issue.status {
            IssueStatus::Submitted => by_status.submitted += 1,
            IssueStatus::Verified => by_status.verified += 1,
            IssueStatus::InProgress => by_status.in_progress += 1,
            IssueStatus::Resolved => by_status.resolved += 1,
            IssueStatus::Rejected => by_status.rejected += 1,
            IssueStatus::Reported => by_status.reported += 1,
        }
        match issue.priority_label().band {
            PriorityBand::Low => by_band.low += 1,
            PriorityBand::Medium => by_band.medium += 1,
            PriorityBand::High => by_band.high += 1,
            PriorityBand::Critical => by_band.critical += 1,
        }
        if issue.status == IssueStatus::Resolved && now - issue.updated_at <= window {
            recent_resolved += 1;
        }
    }

    let total_issues = issues.len();
    PortalStats {
        total_issues,
        resolved_issues: by_status.resolved,
        pending_issues: total_issues - by_status.resolved,
        response_rate: percentage(recent_resolved, total_issues),
        total_users,
        by_status,
        by_band,
    }
}

/// `round(part / whole * 100)`, or 0 for an empty whole.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 100 + whole / 2) / whole;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::fixtures::{at, issue};
    use crate::enums::IssueCategory::{Roads, Water};

    #[test]
    fn empty_portal_has_zero_rate() {
        let stats = compute_stats(&[], 0, 7, at(10));
        assert_eq!(stats.total_issues, 0);
        assert_eq!(stats.response_rate, 0);
    }

    #[test]
    fn counts_and_response_rate() {
        let mut recent = issue("iss-1", Water, 9);
        recent.status = IssueStatus::Resolved;
        recent.updated_at = at(8);
        let mut stale = issue("iss-2", Roads, 7);
        stale.status = IssueStatus::Resolved;
        stale.updated_at = at(1);
        let pending = issue("iss-3", Water, 4);

        let stats = compute_stats(&[recent, stale, pending], 5, 7, at(10));
        assert_eq!(stats.total_issues, 3);
        assert_eq!(stats.resolved_issues, 2);
        assert_eq!(stats.pending_issues, 1);
        assert_eq!(stats.total_users, 5);
        // one of three resolved within the window -> 33%
        assert_eq!(stats.response_rate, 33);
        assert_eq!(stats.by_status.submitted, 1);
        assert_eq!(
            stats.by_band,
            BandCounts {
                low: 1,
                medium: 0,
                high: 1,
                critical: 1,
            }
        );
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
    }
}
