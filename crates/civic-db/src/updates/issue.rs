//! Issue update builder.

use serde::Serialize;

use civic_core::entities::Issue;
use civic_core::enums::{ImpactLevel, IssueCategory, IssueStatus};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<IssueCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<ImpactLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_importance: Option<ImpactLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
}

impl IssueUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
            && self.severity.is_none()
            && self.affected_people.is_none()
            && self.duration_hours.is_none()
            && self.area_importance.is_none()
            && self.status.is_none()
            && self.image.is_none()
    }

    /// Apply the present fields to `issue`.
    ///
    /// Factor edits leave `priority_score` alone; the stored score only moves
    /// through an explicit recompute.
    pub fn apply_to(&self, issue: &mut Issue) {
        if let Some(ref title) = self.title {
            issue.title.clone_from(title);
        }
        if let Some(ref description) = self.description {
            issue.description.clone_from(description);
        }
        if let Some(category) = self.category {
            issue.category = category;
        }
        if let Some(ref location) = self.location {
            issue.location.clone_from(location);
        }
        if let Some(severity) = self.severity {
            issue.severity = Some(severity);
        }
        if let Some(affected_people) = self.affected_people {
            issue.affected_people = affected_people;
        }
        if let Some(duration_hours) = self.duration_hours {
            issue.duration_hours = duration_hours;
        }
        if let Some(area_importance) = self.area_importance {
            issue.area_importance = Some(area_importance);
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
        if let Some(ref image) = self.image {
            issue.image.clone_from(image);
        }
    }
}

pub struct IssueUpdateBuilder(IssueUpdate);

impl IssueUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IssueUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn category(mut self, category: IssueCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: ImpactLevel) -> Self {
        self.0.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn affected_people(mut self, affected_people: u32) -> Self {
        self.0.affected_people = Some(affected_people);
        self
    }

    #[must_use]
    pub fn duration_hours(mut self, duration_hours: u32) -> Self {
        self.0.duration_hours = Some(duration_hours);
        self
    }

    #[must_use]
    pub fn area_importance(mut self, area_importance: ImpactLevel) -> Self {
        self.0.area_importance = Some(area_importance);
        self
    }

    #[must_use]
    pub fn status(mut self, status: IssueStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn image(mut self, image: Option<String>) -> Self {
        self.0.image = Some(image);
        self
    }

    #[must_use]
    pub fn build(self) -> IssueUpdate {
        self.0
    }
}

impl Default for IssueUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_empty() {
        assert!(IssueUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn serializes_only_present_fields() {
        let update = IssueUpdateBuilder::new()
            .status(IssueStatus::InProgress)
            .location(None)
            .build();
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"location": null, "status": "in_progress"})
        );
    }
}
