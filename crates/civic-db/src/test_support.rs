//! Shared test utilities for civic-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use civic_core::entities::{Issue, User};
    use civic_core::enums::{ImpactLevel, IssueCategory};

    use crate::PortalDb;
    use crate::repos::issue::IssueSubmission;
    use crate::service::PortalService;
    use crate::trail::writer::TrailWriter;

    pub const ADMIN_EMAIL: &str = "admin@example.com";

    /// In-memory service with the trail disabled and the default admin email.
    pub async fn test_service() -> PortalService {
        let db = PortalDb::open_local(":memory:").await.unwrap();
        PortalService::from_db(db, TrailWriter::disabled(), vec![ADMIN_EMAIL.to_string()])
    }

    /// In-memory service writing its trail to `trail_dir`.
    pub async fn test_service_with_trail(trail_dir: std::path::PathBuf) -> PortalService {
        let db = PortalDb::open_local(":memory:").await.unwrap();
        let trail = TrailWriter::new(trail_dir).unwrap();
        PortalService::from_db(db, trail, vec![ADMIN_EMAIL.to_string()])
    }

    /// Register a citizen and sign them in.
    pub async fn register_and_login(svc: &PortalService, name: &str, email: &str) -> User {
        let user = svc.register_user(name, email, None).await.unwrap();
        svc.login(email).await.unwrap();
        user
    }

    /// Register (if needed) and sign in as the configured admin.
    pub async fn login_admin(svc: &PortalService) -> User {
        let user = match svc.register_user("Portal Admin", ADMIN_EMAIL, None).await {
            Ok(user) => user,
            Err(_) => {
                let session = svc.login(ADMIN_EMAIL).await.unwrap();
                return svc.get_user(&session.user.id).await.unwrap();
            }
        };
        svc.login(ADMIN_EMAIL).await.unwrap();
        user
    }

    pub fn submission(title: &str, severity: ImpactLevel, affected_people: u32) -> IssueSubmission {
        IssueSubmission {
            title: title.to_string(),
            description: None,
            category: IssueCategory::Water,
            location: Some("Kebele 04".to_string()),
            severity,
            affected_people,
            duration_hours: 12,
            area_importance: ImpactLevel::Medium,
            image: None,
        }
    }

    /// Submit an issue as whoever is currently signed in.
    pub async fn submit(svc: &PortalService, title: &str, severity: ImpactLevel) -> Issue {
        svc.submit_issue(submission(title, severity, 30)).await.unwrap()
    }
}
