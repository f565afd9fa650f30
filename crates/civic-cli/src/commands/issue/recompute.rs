use serde::Serialize;

use civic_core::entities::Issue;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecomputeResponse {
    previous_score: u8,
    issue: Issue,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let previous_score = ctx.service.get_issue(id).await?.priority_score;
    let issue = ctx.service.recompute_priority(id).await?;
    tracing::debug!(id, from = previous_score, to = issue.priority_score, "recomputed priority");
    output(
        &RecomputeResponse {
            previous_score,
            issue,
        },
        flags.format,
    )
}
