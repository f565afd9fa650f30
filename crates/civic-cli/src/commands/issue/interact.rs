//! Citizen interactions on a single issue.

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn comment(id: &str, body: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if body.trim().is_empty() {
        anyhow::bail!("comment body must not be empty");
    }
    let issue = ctx.service.comment_on_issue(id, body).await?;
    output(&issue, flags.format)
}

/// Flag an issue as inappropriate.
pub async fn report(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = ctx.service.report_issue(id).await?;
    output(&issue, flags.format)
}

pub async fn upvote(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = ctx.service.upvote_issue(id).await?;
    output(&issue, flags.format)
}
