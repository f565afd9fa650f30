use civic_core::enums::{ImpactLevel, IssueCategory};
use civic_db::updates::issue::{IssueUpdate, IssueUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub severity: Option<String>,
    pub affected_people: Option<u32>,
    pub duration_hours: Option<u32>,
    pub area_importance: Option<String>,
    pub image: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(&params)?;
    let issue = ctx.service.edit_issue(&params.id, update).await?;
    output(&issue, flags.format)
}

/// An empty string clears an optional text field.
fn clearable(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn build_update(params: &Params) -> anyhow::Result<IssueUpdate> {
    let mut builder = IssueUpdateBuilder::new();
    if let Some(title) = &params.title {
        builder = builder.title(title.clone());
    }
    if let Some(description) = &params.description {
        builder = builder.description(clearable(description));
    }
    if let Some(category) = &params.category {
        builder = builder.category(parse_enum::<IssueCategory>(category, "category")?);
    }
    if let Some(location) = &params.location {
        builder = builder.location(clearable(location));
    }
    if let Some(severity) = &params.severity {
        builder = builder.severity(parse_enum::<ImpactLevel>(severity, "severity")?);
    }
    if let Some(affected_people) = params.affected_people {
        builder = builder.affected_people(affected_people);
    }
    if let Some(duration_hours) = params.duration_hours {
        builder = builder.duration_hours(duration_hours);
    }
    if let Some(area_importance) = &params.area_importance {
        builder = builder.area_importance(parse_enum::<ImpactLevel>(area_importance, "area importance")?);
    }
    if let Some(image) = &params.image {
        builder = builder.image(clearable(image));
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("issue update requires at least one field to change");
    }
    Ok(update)
}
