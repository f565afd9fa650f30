use civic_core::enums::IssueStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<IssueStatus>(status, "status")?;
    let issue = ctx.service.set_issue_status(id, status).await?;
    output(&issue, flags.format)
}
