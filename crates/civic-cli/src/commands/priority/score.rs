use serde::Serialize;

use civic_core::priority::{PriorityFactors, PriorityLabel, label_for_score};

use crate::cli::GlobalFlags;
use crate::commands::shared::factors::form_factors;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreResponse {
    factors: PriorityFactors,
    score: u8,
    #[serde(flatten)]
    label: PriorityLabel,
}

pub fn run(
    severity: &str,
    affected_people: u32,
    duration_hours: u32,
    area_importance: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let factors = form_factors(severity, affected_people, duration_hours, area_importance);
    let score = factors.score();
    output(
        &ScoreResponse {
            factors,
            score,
            label: label_for_score(score),
        },
        flags.format,
    )
}
