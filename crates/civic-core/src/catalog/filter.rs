use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::{IssueCategory, IssueStatus};
use crate::priority::PriorityBand;

/// Criteria for [`filter_issues`]. All present criteria are ANDed; a `None`
/// or empty criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFilter {
    /// Case-insensitive substring over title, description, and location.
    pub search: Option<String>,
    pub category: Option<IssueCategory>,
    pub status: Option<IssueStatus>,
    pub priority_band: Option<PriorityBand>,
    /// Restrict to issues filed by this user id.
    pub reporter_id: Option<String>,
}

impl IssueFilter {
    /// Whether no criterion would narrow the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.priority_band.is_none()
            && self.reporter().is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn reporter(&self) -> Option<&str> {
        self.reporter_id.as_deref().filter(|id| !id.is_empty())
    }

    fn matches(&self, issue: &Issue, search: Option<&str>) -> bool {
        if let Some(term) = search {
            let hit = [
                Some(issue.title.as_str()),
                issue.description.as_deref(),
                issue.location.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term));
            if !hit {
                return false;
            }
        }
        if self.category.is_some_and(|category| issue.category != category) {
            return false;
        }
        if self.status.is_some_and(|status| issue.status != status) {
            return false;
        }
        if self
            .priority_band
            .is_some_and(|band| issue.priority_label().band != band)
        {
            return false;
        }
        if let Some(reporter) = self.reporter() {
            let filed_by = issue.reported_by.as_ref().map(|r| r.id.as_str());
            if filed_by != Some(reporter) {
                return false;
            }
        }
        true
    }
}

/// Return the issues matching `criteria`, in their input order.
#[must_use]
pub fn filter_issues(issues: &[Issue], criteria: &IssueFilter) -> Vec<Issue> {
    let search = criteria.search_term();
    issues
        .iter()
        .filter(|issue| criteria.matches(issue, search.as_deref()))
        .cloned()
        .collect()
}
