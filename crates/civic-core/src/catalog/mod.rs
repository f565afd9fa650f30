//! In-memory catalog operations over caller-owned issue and user collections.
//!
//! Nothing here touches storage: the store returns a list, the catalog
//! narrows or mutates it. Filtering never re-sorts; see
//! [`crate::priority::sort_by_priority`] for explicit ordering.

mod bulk;
mod filter;
mod tabs;
mod users;

pub use bulk::{BulkFailure, BulkUpdateReport, bulk_update_status};
pub use filter::{IssueFilter, filter_issues};
pub use tabs::{MyIssuesTab, TabCounts, my_issues};
pub use users::{UserFilter, filter_users};
