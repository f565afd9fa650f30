use civic_core::enums::{ImpactLevel, IssueCategory};
use civic_db::repos::issue::IssueSubmission;

use crate::cli::GlobalFlags;
use crate::commands::shared::factors::form_factors;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: Option<String>,
    pub severity: String,
    pub affected_people: u32,
    pub duration_hours: u32,
    pub area_importance: String,
    pub image: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let submission = build_submission(params)?;
    let issue = ctx.service.submit_issue(submission).await?;
    output(&issue, flags.format)
}

/// Levels degrade to low exactly as `priority score` does, so a submission
/// is stored with the factors it was scored on.
fn build_submission(params: Params) -> anyhow::Result<IssueSubmission> {
    let factors = form_factors(
        &params.severity,
        params.affected_people,
        params.duration_hours,
        &params.area_importance,
    );
    Ok(IssueSubmission {
        title: params.title,
        description: params.description,
        category: parse_enum::<IssueCategory>(&params.category, "category")?,
        location: params.location,
        severity: factors.severity.unwrap_or(ImpactLevel::Low),
        affected_people: factors.affected_people,
        duration_hours: factors.duration_hours,
        area_importance: factors.area_importance.unwrap_or(ImpactLevel::Low),
        image: params.image,
    })
}
