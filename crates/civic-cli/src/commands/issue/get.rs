use serde::Serialize;

use civic_core::entities::Issue;
use civic_core::priority::PriorityLabel;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IssueDetailResponse {
    issue: Issue,
    priority: PriorityLabel,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = ctx.service.get_issue(id).await?;
    let priority = issue.priority_label();
    output(&IssueDetailResponse { issue, priority }, flags.format)
}
