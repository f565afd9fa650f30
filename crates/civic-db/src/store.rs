//! Storage collaborator interfaces.
//!
//! The portal's catalog and bulk logic only ever talk to storage through
//! these traits. `PortalService` is the production implementation; tests
//! substitute in-memory stores.

use std::future::Future;

use chrono::Utc;

use civic_core::entities::{Issue, IssueDraft};
use civic_core::enums::{EntityType, TrailOp};
use civic_core::identity::SessionUser;
use civic_core::ids::PREFIX_ISSUE;

use crate::error::DatabaseError;
use crate::records::KEY_ISSUES;
use crate::service::PortalService;
use crate::updates::issue::IssueUpdate;

/// Persists issue records.
pub trait IssueStore {
    /// All issues, newest first.
    fn list(&self) -> impl Future<Output = Result<Vec<Issue>, DatabaseError>>;

    /// Fetch one issue. Unknown ids are `DatabaseError::NotFound`.
    fn get_by_id(&self, id: &str) -> impl Future<Output = Result<Issue, DatabaseError>>;

    /// Persist a new issue. The store assigns `id`, `status = submitted`,
    /// and both timestamps.
    fn create(&self, draft: IssueDraft) -> impl Future<Output = Result<Issue, DatabaseError>>;

    /// Apply a partial update and refresh `updated_at`. Once the write
    /// lands the update counts as done, even if trailing it fails.
    fn update(
        &self,
        id: &str,
        update: IssueUpdate,
    ) -> impl Future<Output = Result<Issue, DatabaseError>>;
}

/// Resolves the signed-in user.
pub trait SessionStore {
    fn current_user(&self) -> impl Future<Output = Result<Option<SessionUser>, DatabaseError>>;
}

impl IssueStore for PortalService {
    async fn list(&self) -> Result<Vec<Issue>, DatabaseError> {
        self.db().get_collection(KEY_ISSUES).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Issue, DatabaseError> {
        self.list()
            .await?
            .into_iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| DatabaseError::not_found("issue", id))
    }

    async fn create(&self, draft: IssueDraft) -> Result<Issue, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ISSUE).await?;
        let issue = draft.into_issue(id, now);

        let mut issues = self.list().await?;
        issues.insert(0, issue.clone());
        self.db().put_document(KEY_ISSUES, &issues).await?;

        self.record_committed(TrailOp::Create, EntityType::Issue, &issue.id, &issue, now)
            .await;
        Ok(issue)
    }

    async fn update(&self, id: &str, update: IssueUpdate) -> Result<Issue, DatabaseError> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }
        let now = Utc::now();
        let updated = self
            .modify_issue(id, now, |issue| {
                update.apply_to(issue);
                Ok(())
            })
            .await?;
        self.record_committed(TrailOp::Update, EntityType::Issue, id, &update, now)
            .await;
        Ok(updated)
    }
}

impl SessionStore for PortalService {
    async fn current_user(&self) -> Result<Option<SessionUser>, DatabaseError> {
        Ok(self.current_session().await?.map(|session| session.user))
    }
}

impl PortalService {
    /// Read-modify-write a single issue in the `issues` document.
    ///
    /// `change` runs against the stored record; when it succeeds the record's
    /// `updated_at` is set to `now` and the document is written back.
    pub(crate) async fn modify_issue<F>(
        &self,
        id: &str,
        now: chrono::DateTime<Utc>,
        change: F,
    ) -> Result<Issue, DatabaseError>
    where
        F: FnOnce(&mut Issue) -> Result<(), DatabaseError>,
    {
        let mut issues: Vec<Issue> = self.db().get_collection(KEY_ISSUES).await?;
        let issue = issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| DatabaseError::not_found("issue", id))?;
        change(issue)?;
        issue.updated_at = now;
        let updated = issue.clone();
        self.db().put_document(KEY_ISSUES, &issues).await?;
        Ok(updated)
    }
}
