//! Admin analytics over the stored issues and users.

use chrono::Utc;

use civic_core::stats::{PortalStats, compute_stats};

use crate::error::DatabaseError;
use crate::service::PortalService;
use crate::store::IssueStore;

impl PortalService {
    /// Dashboard summary. `response_window_days` bounds what counts as a
    /// timely resolution.
    pub async fn portal_stats(&self, response_window_days: u32) -> Result<PortalStats, DatabaseError> {
        self.require_admin().await?;
        let issues = self.list().await?;
        let total_users = self.count_users().await?;
        Ok(compute_stats(&issues, total_users, response_window_days, Utc::now()))
    }
}
