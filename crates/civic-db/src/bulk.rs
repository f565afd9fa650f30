//! Store-backed bulk status change.
//!
//! Each id is an independent `IssueStore::update`. Failures are collected
//! per id and the loop continues; nothing already written is rolled back.

use civic_core::catalog::{BulkFailure, BulkUpdateReport};
use civic_core::enums::IssueStatus;

use crate::store::IssueStore;
use crate::updates::issue::IssueUpdateBuilder;

/// Set `status` on each id in order, reporting which updates succeeded.
///
/// Repeated ids are applied once.
pub async fn bulk_update_status<S, I>(store: &S, ids: &[I], status: IssueStatus) -> BulkUpdateReport
where
    S: IssueStore,
    I: AsRef<str>,
{
    let mut report = BulkUpdateReport::new(status);
    let mut seen: Vec<&str> = Vec::with_capacity(ids.len());

    for id in ids {
        let id = id.as_ref();
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);

        let update = IssueUpdateBuilder::new().status(status).build();
        match store.update(id, update).await {
            Ok(issue) => report.updated.push(issue.id),
            Err(error) => {
                tracing::warn!(id, %error, "bulk status update failed");
                report.failed.push(BulkFailure {
                    id: id.to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }

    tracing::info!(
        status = %status,
        updated = report.updated_count(),
        failed = report.failure_count(),
        "bulk status update finished"
    );
    report
}
