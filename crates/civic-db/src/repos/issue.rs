//! Issue repository: submission, listing, moderation, and interactions.
//!
//! Reads go through the `IssueStore` implementation on `PortalService`;
//! this module adds scoring on submission, role gates, notifications, and
//! the status-change trail.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use civic_core::catalog::{
    BulkUpdateReport, IssueFilter, MyIssuesTab, TabCounts, filter_issues, my_issues,
};
use civic_core::entities::{Comment, Issue, IssueDraft, Reporter};
use civic_core::enums::{
    EntityType, ImpactLevel, IssueCategory, IssueStatus, NotificationKind, TrailOp,
};
use civic_core::ids::PREFIX_COMMENT;
use civic_core::priority::{self, compute_score};

use crate::bulk;
use crate::error::DatabaseError;
use crate::service::PortalService;
use crate::store::IssueStore;
use crate::updates::issue::IssueUpdate;

/// Form fields a citizen fills in when reporting an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSubmission {
    pub title: String,
    pub description: Option<String>,
    pub category: IssueCategory,
    pub location: Option<String>,
    pub severity: ImpactLevel,
    pub affected_people: u32,
    pub duration_hours: u32,
    pub area_importance: ImpactLevel,
    pub image: Option<String>,
}

/// Trail payload for status changes.
#[derive(Debug, Clone, Copy, Serialize)]
struct StatusChange {
    from: IssueStatus,
    to: IssueStatus,
}

/// Trail payload for score recomputation.
#[derive(Debug, Clone, Copy, Serialize)]
struct ScoreChange {
    from: u8,
    to: u8,
}

impl PortalService {
    /// Score and persist a new issue filed by the signed-in user.
    pub async fn submit_issue(&self, form: IssueSubmission) -> Result<Issue, DatabaseError> {
        let user = self.require_user().await?;
        let title = form.title.trim();
        if title.is_empty() {
            return Err(DatabaseError::InvalidState("issue title is required".into()));
        }

        let priority_score = compute_score(
            Some(form.severity),
            form.affected_people,
            form.duration_hours,
            Some(form.area_importance),
        );
        let draft = IssueDraft {
            title: title.to_string(),
            description: form.description,
            category: form.category,
            location: form.location,
            severity: form.severity,
            affected_people: form.affected_people,
            duration_hours: form.duration_hours,
            area_importance: form.area_importance,
            priority_score,
            reported_by: Some(Reporter::from(&user)),
            image: form.image,
        };

        let issue = self.create(draft).await?;
        self.notify(
            &issue.id,
            format!("New issue submitted: {}", issue.title),
            NotificationKind::IssueSubmitted,
        )
        .await?;
        tracing::info!(issue = %issue.id, score = issue.priority_score, "issue submitted");
        Ok(issue)
    }

    pub async fn get_issue(&self, id: &str) -> Result<Issue, DatabaseError> {
        self.get_by_id(id).await
    }

    /// Issues matching `filter`, newest first, or by descending priority
    /// when `by_priority` is set.
    pub async fn list_issues(
        &self,
        filter: &IssueFilter,
        by_priority: bool,
    ) -> Result<Vec<Issue>, DatabaseError> {
        let issues = self.list().await?;
        let mut matched = filter_issues(&issues, filter);
        if by_priority {
            priority::sort_by_priority(&mut matched);
        }
        Ok(matched)
    }

    /// The signed-in user's own issues under `tab`, with per-tab counts.
    pub async fn my_issues(
        &self,
        tab: MyIssuesTab,
    ) -> Result<(Vec<Issue>, TabCounts), DatabaseError> {
        let user = self.require_user().await?;
        let issues = self.list().await?;
        Ok(my_issues(&issues, &user.id, tab))
    }

    /// Edit issue fields. Allowed for admins and for the issue's reporter.
    ///
    /// The stored score is kept even when factors change.
    pub async fn edit_issue(
        &self,
        id: &str,
        update: IssueUpdate,
    ) -> Result<Issue, DatabaseError> {
        let user = self.require_user().await?;
        if !user.is_admin(self.admin_emails()) {
            let issue = self.get_by_id(id).await?;
            let owns = issue
                .reported_by
                .as_ref()
                .is_some_and(|reporter| reporter.id == user.id);
            if !owns {
                return Err(DatabaseError::Forbidden(format!(
                    "{} may only edit their own issues",
                    user.email
                )));
            }
            if update.status.is_some() {
                return Err(DatabaseError::Forbidden(
                    "only administrators change status".into(),
                ));
            }
        }
        self.update(id, update).await
    }

    /// Set an issue's status. Admin only; any status may follow any other.
    pub async fn set_issue_status(
        &self,
        id: &str,
        status: IssueStatus,
    ) -> Result<Issue, DatabaseError> {
        self.require_admin().await?;
        self.transition(id, status).await
    }

    /// Set `status` on every id, one independent update per id.
    pub async fn bulk_set_status<S: AsRef<str>>(
        &self,
        ids: &[S],
        status: IssueStatus,
    ) -> Result<BulkUpdateReport, DatabaseError> {
        self.require_admin().await?;
        Ok(bulk::bulk_update_status(self, ids, status).await)
    }

    pub async fn comment_on_issue(&self, id: &str, body: &str) -> Result<Issue, DatabaseError> {
        let user = self.require_user().await?;
        let body = body.trim();
        if body.is_empty() {
            return Err(DatabaseError::InvalidState("comment is empty".into()));
        }

        let now = Utc::now();
        let comment = Comment {
            id: self.db().generate_id(PREFIX_COMMENT).await?,
            author: Reporter::from(&user),
            body: body.to_string(),
            created_at: now,
        };
        let issue = self
            .modify_issue(id, now, |issue| {
                issue.comments.push(comment.clone());
                Ok(())
            })
            .await?;
        self.record(TrailOp::Comment, EntityType::Issue, id, &comment, now)
            .await?;
        Ok(issue)
    }

    /// Flag an issue for review. Sets status `reported` and notifies admins.
    pub async fn report_issue(&self, id: &str) -> Result<Issue, DatabaseError> {
        self.require_user().await?;
        let issue = self.transition(id, IssueStatus::Reported).await?;
        self.notify(
            &issue.id,
            format!("Issue reported: {}", issue.title),
            NotificationKind::IssueReported,
        )
        .await?;
        Ok(issue)
    }

    pub async fn upvote_issue(&self, id: &str) -> Result<Issue, DatabaseError> {
        self.require_user().await?;
        let now = Utc::now();
        let issue = self
            .modify_issue(id, now, |issue| {
                issue.upvotes = issue.upvotes.saturating_add(1);
                Ok(())
            })
            .await?;
        self.record(
            TrailOp::Upvote,
            EntityType::Issue,
            id,
            &serde_json::json!({ "upvotes": issue.upvotes }),
            now,
        )
        .await?;
        Ok(issue)
    }

    /// Recompute the stored score from the issue's current factors.
    ///
    /// This is the only operation that changes `priority_score` after
    /// submission.
    pub async fn recompute_priority(&self, id: &str) -> Result<Issue, DatabaseError> {
        self.require_admin().await?;
        let now = Utc::now();
        let mut change = ScoreChange { from: 0, to: 0 };
        let issue = self
            .modify_issue(id, now, |issue| {
                change.from = issue.priority_score;
                issue.priority_score = issue.factors().score();
                change.to = issue.priority_score;
                Ok(())
            })
            .await?;
        self.record(TrailOp::Recompute, EntityType::Issue, id, &change, now)
            .await?;
        tracing::info!(issue = id, from = change.from, to = change.to, "priority recomputed");
        Ok(issue)
    }

    async fn transition(&self, id: &str, status: IssueStatus) -> Result<Issue, DatabaseError> {
        let now = Utc::now();
        let mut change = StatusChange {
            from: status,
            to: status,
        };
        let issue = self
            .modify_issue(id, now, |issue| {
                change.from = issue.status;
                issue.status = status;
                Ok(())
            })
            .await?;
        self.record(TrailOp::Transition, EntityType::Issue, id, &change, now)
            .await?;
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use civic_core::priority::PriorityBand;

    use super::*;
    use civic_core::trail::TrailOperation;

    use crate::records::KEY_ISSUES;
    use crate::test_support::helpers::{
        login_admin, register_and_login, submission, submit, test_service,
        test_service_with_trail,
    };
    use crate::updates::issue::IssueUpdateBuilder;

    #[tokio::test]
    async fn submit_scores_and_stamps_reporter() {
        let svc = test_service().await;
        let hana = register_and_login(&svc, "Hana", "hana@example.com").await;

        // high(3) + 30 people(2) + 12h(2) + medium(2) = 9 -> 5.625 -> 6
        let issue = submit(&svc, "Burst main", ImpactLevel::High).await;

        assert!(issue.id.starts_with("iss-"));
        assert_eq!(issue.priority_score, 6);
        assert_eq!(issue.status, IssueStatus::Submitted);
        assert_eq!(issue.reported_by.as_ref().unwrap().id, hana.id);
        assert_eq!(issue.created_at, issue.updated_at);
        assert_eq!(svc.get_issue(&issue.id).await.unwrap(), issue);
    }

    #[tokio::test]
    async fn submit_requires_sign_in() {
        let svc = test_service().await;
        let err = svc
            .submit_issue(submission("Pothole", ImpactLevel::Low, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_sorts_on_request() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let low = submit(&svc, "Flicker", ImpactLevel::Low).await;
        let critical = submit(&svc, "Gas leak", ImpactLevel::Critical).await;
        let medium = submit(&svc, "Leaky tap", ImpactLevel::Medium).await;

        let newest: Vec<_> = svc
            .list_issues(&IssueFilter::default(), false)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(newest, vec![medium.id.clone(), critical.id.clone(), low.id.clone()]);

        let ranked: Vec<_> = svc
            .list_issues(&IssueFilter::default(), true)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ranked[0], critical.id);
    }

    #[tokio::test]
    async fn list_filters_by_band() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        submit(&svc, "Flicker", ImpactLevel::Low).await;
        let gas = svc
            .submit_issue(IssueSubmission {
                duration_hours: 100,
                area_importance: ImpactLevel::Critical,
                ..submission("Gas leak", ImpactLevel::Critical, 500)
            })
            .await
            .unwrap();

        let filter = IssueFilter {
            priority_band: Some(PriorityBand::Critical),
            ..IssueFilter::default()
        };
        let hits = svc.list_issues(&filter, false).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, gas.id);
    }

    #[tokio::test]
    async fn factor_edits_keep_score_until_recompute() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;
        let original = issue.priority_score;

        let update = IssueUpdateBuilder::new()
            .severity(ImpactLevel::Critical)
            .affected_people(1000)
            .build();
        let edited = svc.edit_issue(&issue.id, update).await.unwrap();
        assert_eq!(edited.severity, Some(ImpactLevel::Critical));
        assert_eq!(edited.priority_score, original);

        login_admin(&svc).await;
        let recomputed = svc.recompute_priority(&issue.id).await.unwrap();
        assert_eq!(recomputed.priority_score, recomputed.factors().score());
        assert!(recomputed.priority_score > original);
    }

    #[tokio::test]
    async fn citizens_cannot_edit_others_issues() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;

        register_and_login(&svc, "Dawit", "dawit@example.com").await;
        let err = svc
            .edit_issue(&issue.id, IssueUpdateBuilder::new().title("Mine now").build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));
    }

    #[tokio::test]
    async fn reporters_cannot_change_status_through_edit() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;
        let err = svc
            .edit_issue(
                &issue.id,
                IssueUpdateBuilder::new().status(IssueStatus::Resolved).build(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));
    }

    #[tokio::test]
    async fn status_change_is_admin_only() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;

        let err = svc
            .set_issue_status(&issue.id, IssueStatus::Resolved)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));

        login_admin(&svc).await;
        let resolved = svc
            .set_issue_status(&issue.id, IssueStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(resolved.status, IssueStatus::Resolved);
        assert!(resolved.updated_at >= issue.updated_at);
    }

    #[tokio::test]
    async fn bulk_status_reports_missing_ids() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let a = submit(&svc, "One", ImpactLevel::Low).await;
        let b = submit(&svc, "Two", ImpactLevel::Low).await;
        let c = submit(&svc, "Three", ImpactLevel::Low).await;

        login_admin(&svc).await;
        let report = svc
            .bulk_set_status(&[a.id.as_str(), c.id.as_str(), "iss-00000000"], IssueStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(report.updated, vec![a.id.clone(), c.id.clone()]);
        assert_eq!(report.failure_count(), 1);

        let stored_a = svc.get_issue(&a.id).await.unwrap();
        let stored_b = svc.get_issue(&b.id).await.unwrap();
        let stored_c = svc.get_issue(&c.id).await.unwrap();
        assert_eq!(stored_a.status, IssueStatus::Resolved);
        assert_eq!(stored_b.status, IssueStatus::Submitted);
        assert_eq!(stored_c.status, IssueStatus::Resolved);

        assert!(stored_a.updated_at > stored_a.created_at);
        assert!(stored_c.updated_at > stored_c.created_at);
        assert_eq!(stored_b.updated_at, b.updated_at);
    }

    #[tokio::test]
    async fn bulk_status_counts_written_ids_when_trail_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let svc = test_service_with_trail(dir.path().to_path_buf()).await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let a = submit(&svc, "One", ImpactLevel::Low).await;
        let admin = login_admin(&svc).await;
        let session = svc.current_session().await.unwrap().unwrap();
        assert_eq!(session.user.id, admin.id);

        // A directory where the session's trail file belongs makes every
        // append for this session fail.
        let trail_file = dir.path().join(TrailOperation::file_name(&session.id));
        std::fs::remove_file(&trail_file).unwrap();
        std::fs::create_dir(&trail_file).unwrap();

        let report = svc
            .bulk_set_status(&[a.id.as_str()], IssueStatus::Verified)
            .await
            .unwrap();
        assert_eq!(report.updated, vec![a.id.clone()]);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(svc.get_issue(&a.id).await.unwrap().status, IssueStatus::Verified);
    }

    #[tokio::test]
    async fn legacy_records_stay_listable() {
        let svc = test_service().await;
        let legacy = serde_json::json!([
            {
                "id": "1",
                "title": "Water Supply Disruption",
                "category": "water",
                "severity": "critical",
                "priorityScore": 9,
                "status": "in_progress",
                "location": "Bole, Addis Ababa",
                "affectedPeople": 150,
                "durationHours": 48,
                "areaImportance": "high",
                "createdAt": "2024-01-15T08:30:00Z"
            },
            {
                "id": "2",
                "title": "Street Light Not Working",
                "category": "electricity",
                "severity": "urgent",
                "priorityScore": null,
                "status": "submitted",
                "affectedPeople": 50,
                "durationHours": 336,
                "createdAt": "2024-01-14T14:20:00Z"
            }
        ]);
        svc.db().put_document(KEY_ISSUES, &legacy).await.unwrap();

        let filter = IssueFilter {
            priority_band: Some(PriorityBand::Critical),
            ..IssueFilter::default()
        };
        let hits = svc.list_issues(&filter, false).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let light = svc.get_issue("2").await.unwrap();
        assert_eq!(light.priority_score, 5);
        assert_eq!(light.severity, None);
        assert_eq!(light.updated_at, light.created_at);
    }

    #[tokio::test]
    async fn report_sets_status_and_notifies() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Fake report", ImpactLevel::Low).await;

        let reported = svc.report_issue(&issue.id).await.unwrap();
        assert_eq!(reported.status, IssueStatus::Reported);

        login_admin(&svc).await;
        let notifications = svc.list_notifications(false).await.unwrap();
        assert_eq!(notifications[0].kind, NotificationKind::IssueReported);
        assert_eq!(notifications[0].title, "Issue reported: Fake report");
        assert_eq!(notifications[0].issue_id, issue.id);
    }

    #[tokio::test]
    async fn comments_and_upvotes_accumulate() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;

        svc.comment_on_issue(&issue.id, "Still leaking").await.unwrap();
        svc.upvote_issue(&issue.id).await.unwrap();
        let issue = svc.upvote_issue(&issue.id).await.unwrap();

        assert_eq!(issue.upvotes, 2);
        assert_eq!(issue.comments.len(), 1);
        assert_eq!(issue.comments[0].body, "Still leaking");
        assert_eq!(issue.comments[0].author.name, "Hana");
        assert!(issue.comments[0].id.starts_with("cmt-"));
    }

    #[tokio::test]
    async fn empty_comment_is_rejected() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let issue = submit(&svc, "Burst main", ImpactLevel::Low).await;
        let err = svc.comment_on_issue(&issue.id, "   ").await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn my_issues_scopes_to_signed_in_user() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let mine = submit(&svc, "Mine", ImpactLevel::Low).await;
        register_and_login(&svc, "Dawit", "dawit@example.com").await;
        submit(&svc, "Not mine", ImpactLevel::Low).await;

        svc.login("hana@example.com").await.unwrap();
        let (issues, counts) = svc.my_issues(MyIssuesTab::Active).await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, mine.id);
        assert_eq!(counts.all, 1);
        assert_eq!(counts.submitted, 1);
    }

    #[tokio::test]
    async fn unknown_issue_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_issue("iss-00000000").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
