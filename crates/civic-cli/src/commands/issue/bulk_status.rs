use civic_core::enums::IssueStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: &str,
    ids: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<IssueStatus>(status, "status")?;
    let report = ctx.service.bulk_set_status(ids, status).await?;

    if !flags.quiet {
        for failure in &report.failed {
            eprintln!("warning: {} not updated: {}", failure.id, failure.reason);
        }
    }
    output(&report, flags.format)
}
