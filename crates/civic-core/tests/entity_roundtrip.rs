//! Serde roundtrip and JsonSchema validation tests for stored record types.

use chrono::Utc;
use civic_core::catalog::{BulkFailure, BulkUpdateReport};
use civic_core::entities::*;
use civic_core::enums::*;
use civic_core::identity::SessionUser;
use civic_core::trail::TrailOperation;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn reporter() -> Reporter {
    Reporter {
        id: "usr-a3f8b2c1".into(),
        name: "Selam Girma".into(),
        email: "selam@example.com".into(),
    }
}

roundtrip_and_validate!(
    issue_roundtrip,
    Issue,
    Issue {
        id: "iss-a3f8b2c1".into(),
        title: "Streetlights out on Ring Road".into(),
        description: Some("Whole block dark since Monday".into()),
        category: IssueCategory::Electricity,
        location: Some("Megenagna".into()),
        severity: Some(ImpactLevel::High),
        affected_people: 120,
        duration_hours: 60,
        area_importance: Some(ImpactLevel::Medium),
        priority_score: 7,
        status: IssueStatus::InProgress,
        reported_by: Some(reporter()),
        comments: vec![Comment {
            id: "cmt-0badf00d".into(),
            author: reporter(),
            body: "Still dark tonight.".into(),
            created_at: Utc::now(),
        }],
        upvotes: 4,
        image: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    issue_draft_roundtrip,
    IssueDraft,
    IssueDraft {
        title: "Garbage not collected".into(),
        description: None,
        category: IssueCategory::Sanitation,
        location: None,
        severity: ImpactLevel::Low,
        affected_people: 3,
        duration_hours: 2,
        area_importance: ImpactLevel::Low,
        priority_score: 3,
        reported_by: None,
        image: Some("uploads/garbage.png".into()),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "usr-a3f8b2c1".into(),
        name: "Selam Girma".into(),
        email: "selam@example.com".into(),
        phone: Some("+251911223344".into()),
        role: Role::Citizen,
        status: AccountStatus::Active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    session_roundtrip,
    Session,
    Session {
        id: "ses-12345678".into(),
        user: SessionUser {
            id: "usr-a3f8b2c1".into(),
            name: "Selam Girma".into(),
            email: "selam@example.com".into(),
            role: Role::Admin,
        },
        started_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    notification_roundtrip,
    Notification,
    Notification {
        id: "ntf-87654321".into(),
        issue_id: "iss-a3f8b2c1".into(),
        title: "Issue reported: Streetlights out on Ring Road".into(),
        kind: NotificationKind::IssueReported,
        created_at: Utc::now(),
        read: false,
    }
);

roundtrip_and_validate!(
    bulk_report_roundtrip,
    BulkUpdateReport,
    BulkUpdateReport {
        status: Some(IssueStatus::Resolved),
        updated: vec!["iss-00000001".into()],
        failed: vec![BulkFailure {
            id: "iss-00000003".into(),
            reason: "Entity not found".into(),
        }],
    }
);

roundtrip_and_validate!(
    trail_operation_roundtrip,
    TrailOperation,
    TrailOperation::new(
        "ses-12345678",
        TrailOp::Create,
        EntityType::Issue,
        "iss-a3f8b2c1",
        serde_json::json!({"title": "Streetlights out"}),
        Utc::now(),
    )
);
