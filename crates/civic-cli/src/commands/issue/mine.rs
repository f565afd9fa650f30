use serde::Serialize;

use civic_core::catalog::{MyIssuesTab, TabCounts};
use civic_core::entities::Issue;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MyIssuesResponse {
    tab: String,
    counts: TabCounts,
    issues: Vec<Issue>,
}

pub async fn run(tab: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab: MyIssuesTab = tab.parse()?;
    let (issues, counts) = ctx.service.my_issues(tab).await?;
    output(
        &MyIssuesResponse {
            tab: tab.to_string(),
            counts,
            issues,
        },
        flags.format,
    )
}
