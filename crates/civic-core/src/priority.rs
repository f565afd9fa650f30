//! Priority engine: maps issue factors to a 1–10 score and a display band.
//!
//! ```text
//! severity        low=1 medium=2 high=3 critical=4
//! affected people ≤10=1 ≤50=2   ≤200=3 else=4
//! duration hours  ≤2=1  ≤24=2   ≤72=3  else=4
//! area importance low=1 medium=2 high=3 critical=4
//!
//! raw   = sum of weights            (4..=16)
//! score = round(raw / 16 * 10)      clamped to 1..=10
//! ```
//!
//! Everything here is pure. Unknown or missing severity / area importance
//! contribute the lowest weight instead of failing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::entities::Issue;
use crate::enums::ImpactLevel;
use crate::errors::CoreError;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Highest possible raw score: four factors at weight 4.
const MAX_RAW: u32 = 16;

/// Inputs to [`compute_score`], as collected from the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFactors {
    pub severity: Option<ImpactLevel>,
    pub affected_people: u32,
    pub duration_hours: u32,
    pub area_importance: Option<ImpactLevel>,
}

impl PriorityFactors {
    /// Build factors from raw form strings. Unrecognized levels become `None`.
    #[must_use]
    pub fn from_form(
        severity: &str,
        affected_people: u32,
        duration_hours: u32,
        area_importance: &str,
    ) -> Self {
        Self {
            severity: ImpactLevel::parse_lenient(severity),
            affected_people,
            duration_hours,
            area_importance: ImpactLevel::parse_lenient(area_importance),
        }
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        compute_score(
            self.severity,
            self.affected_people,
            self.duration_hours,
            self.area_importance,
        )
    }
}

const fn level_weight(level: Option<ImpactLevel>) -> u32 {
    match level {
        Some(level) => level.weight() as u32,
        None => 1,
    }
}

const fn affected_people_weight(affected_people: u32) -> u32 {
    match affected_people {
        0..=10 => 1,
        11..=50 => 2,
        51..=200 => 3,
        _ => 4,
    }
}

const fn duration_weight(duration_hours: u32) -> u32 {
    match duration_hours {
        0..=2 => 1,
        3..=24 => 2,
        25..=72 => 3,
        _ => 4,
    }
}

/// Compute the 1–10 priority score for an issue.
///
/// Rounds half up, so a raw score of 4 (every factor at its lowest) yields 3.
#[must_use]
pub fn compute_score(
    severity: Option<ImpactLevel>,
    affected_people: u32,
    duration_hours: u32,
    area_importance: Option<ImpactLevel>,
) -> u8 {
    let raw = level_weight(severity)
        + affected_people_weight(affected_people)
        + duration_weight(duration_hours)
        + level_weight(area_importance);

    // round(raw * 10 / 16) in integer arithmetic
    let normalized = (raw * 10 + MAX_RAW / 2) / MAX_RAW;
    let clamped = normalized.clamp(u32::from(MIN_SCORE), u32::from(MAX_SCORE));
    u8::try_from(clamped).unwrap_or(MAX_SCORE)
}

// ---------------------------------------------------------------------------
// PriorityBand
// ---------------------------------------------------------------------------

/// Qualitative priority band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityBand {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Band for a score. Total over all inputs; out-of-range scores are not
    /// validated and fall into the nearest band.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            9.. => Self::Critical,
            7..=8 => Self::High,
            5..=6 => Self::Medium,
            _ => Self::Low,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Badge class used when rendering the band.
    #[must_use]
    pub const fn visual_class(self) -> &'static str {
        match self {
            Self::Low => "badge-success",
            Self::Medium => "badge-primary",
            Self::High => "badge-warning",
            Self::Critical => "badge-danger",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for PriorityBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|band| band.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("invalid priority '{s}'")))
    }
}

impl fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label and badge class for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityLabel {
    pub band: PriorityBand,
    pub label: &'static str,
    pub visual_class: &'static str,
}

#[must_use]
pub const fn label_for_score(score: u8) -> PriorityLabel {
    let band = PriorityBand::from_score(score);
    PriorityLabel {
        band,
        label: band.label(),
        visual_class: band.visual_class(),
    }
}

/// Stable sort by stored score, highest first. Ties keep their input order.
pub fn sort_by_priority(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| Reverse(issue.priority_score));
}
