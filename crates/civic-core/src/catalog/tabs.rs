use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::filter::{IssueFilter, filter_issues};
use crate::entities::Issue;
use crate::enums::IssueStatus;
use crate::errors::CoreError;

/// Status tab on the "my issues" view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MyIssuesTab {
    #[default]
    All,
    /// Everything not yet resolved.
    Active,
    Status(IssueStatus),
}

impl MyIssuesTab {
    #[must_use]
    pub fn matches(self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Active => issue.status.is_active(),
            Self::Status(status) => issue.status == status,
        }
    }
}

impl FromStr for MyIssuesTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            other => other
                .parse::<IssueStatus>()
                .map(Self::Status)
                .map_err(|_| CoreError::Validation(format!("invalid tab '{s}'"))),
        }
    }
}

impl fmt::Display for MyIssuesTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Active => f.write_str("active"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

/// Per-tab counts shown above the "my issues" list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TabCounts {
    pub all: usize,
    pub active: usize,
    pub submitted: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Issues filed by `reporter_id` that fall under `tab`, with counts across
/// every tab. Order follows the input.
#[must_use]
pub fn my_issues(issues: &[Issue], reporter_id: &str, tab: MyIssuesTab) -> (Vec<Issue>, TabCounts) {
    let mine = filter_issues(
        issues,
        &IssueFilter {
            reporter_id: Some(reporter_id.to_string()),
            ..IssueFilter::default()
        },
    );

    let count = |status: IssueStatus| mine.iter().filter(|i| i.status == status).count();
    let counts = TabCounts {
        all: mine.len(),
        active: mine.iter().filter(|i| i.status.is_active()).count(),
        submitted: count(IssueStatus::Submitted),
        in_progress: count(IssueStatus::InProgress),
        resolved: count(IssueStatus::Resolved),
    };

    let selected = mine.into_iter().filter(|issue| tab.matches(issue)).collect();
    (selected, counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::issue;
    use crate::entities::Reporter;
    use crate::enums::IssueCategory::Water;

    fn sample() -> Vec<Issue> {
        let mut resolved = issue("iss-1", Water, 3);
        resolved.status = IssueStatus::Resolved;
        let mut in_progress = issue("iss-2", Water, 3);
        in_progress.status = IssueStatus::InProgress;
        let submitted = issue("iss-3", Water, 3);
        let mut someone_else = issue("iss-4", Water, 3);
        someone_else.reported_by = Some(Reporter {
            id: "usr-00000002".into(),
            name: "Kebede".into(),
            email: "kebede@example.com".into(),
        });
        vec![resolved, in_progress, submitted, someone_else]
    }

    #[test]
    fn active_tab_excludes_resolved() {
        let (issues, counts) = my_issues(&sample(), "usr-00000001", MyIssuesTab::Active);
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["iss-2", "iss-3"]);
        assert_eq!(
            counts,
            TabCounts {
                all: 3,
                active: 2,
                submitted: 1,
                in_progress: 1,
                resolved: 1,
            }
        );
    }

    #[test]
    fn status_tab_selects_exact_status() {
        let (issues, _) = my_issues(
            &sample(),
            "usr-00000001",
            MyIssuesTab::Status(IssueStatus::Resolved),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "iss-1");
    }

    #[test]
    fn tab_parses_keywords_and_statuses() {
        assert_eq!("all".parse::<MyIssuesTab>().unwrap(), MyIssuesTab::All);
        assert_eq!("Active".parse::<MyIssuesTab>().unwrap(), MyIssuesTab::Active);
        assert_eq!(
            "in-progress".parse::<MyIssuesTab>().unwrap(),
            MyIssuesTab::Status(IssueStatus::InProgress)
        );
        assert!("later".parse::<MyIssuesTab>().is_err());
    }
}
