use serde::Serialize;

use civic_core::catalog::IssueFilter;
use civic_core::entities::Issue;
use civic_core::enums::{IssueCategory, IssueStatus};
use civic_core::priority::PriorityBand;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, page_count, paginate};
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub reporter: Option<String>,
    pub sort: String,
    pub page: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuePage {
    page: u32,
    pages: usize,
    total: usize,
    issues: Vec<Issue>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(&params)?;
    let by_priority = parse_sort(&params.sort)?;
    let per_page = effective_limit(flags.limit, ctx.config.portal.items_per_page);

    let issues = ctx.service.list_issues(&filter, by_priority).await?;
    let total = issues.len();
    let page = params.page.max(1);

    output(
        &IssuePage {
            page,
            pages: page_count(total, per_page),
            total,
            issues: paginate(issues, page, per_page),
        },
        flags.format,
    )
}

fn build_filter(params: &Params) -> anyhow::Result<IssueFilter> {
    Ok(IssueFilter {
        search: params.search.clone(),
        category: parse_opt_enum::<IssueCategory>(params.category.as_deref(), "category")?,
        status: parse_opt_enum::<IssueStatus>(params.status.as_deref(), "status")?,
        priority_band: parse_opt_enum::<PriorityBand>(params.priority.as_deref(), "priority")?,
        reporter_id: params.reporter.clone(),
    })
}

fn parse_sort(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "newest" => Ok(false),
        "priority" => Ok(true),
        _ => anyhow::bail!("invalid sort '{raw}': expected 'newest' or 'priority'"),
    }
}
