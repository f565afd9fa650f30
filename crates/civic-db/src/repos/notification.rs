//! Notification repository: admin alerts raised by issue activity.

use chrono::Utc;

use civic_core::entities::Notification;
use civic_core::enums::NotificationKind;
use civic_core::ids::PREFIX_NOTIFICATION;

use crate::error::DatabaseError;
use crate::records::KEY_NOTIFICATIONS;
use crate::service::PortalService;

impl PortalService {
    /// Prepend a notification for `issue_id`.
    pub(crate) async fn notify(
        &self,
        issue_id: &str,
        title: String,
        kind: NotificationKind,
    ) -> Result<Notification, DatabaseError> {
        let notification = Notification {
            id: self.db().generate_id(PREFIX_NOTIFICATION).await?,
            issue_id: issue_id.to_string(),
            title,
            kind,
            created_at: Utc::now(),
            read: false,
        };
        let mut notifications: Vec<Notification> =
            self.db().get_collection(KEY_NOTIFICATIONS).await?;
        notifications.insert(0, notification.clone());
        self.db()
            .put_document(KEY_NOTIFICATIONS, &notifications)
            .await?;
        tracing::debug!(issue = issue_id, kind = %kind, "notification raised");
        Ok(notification)
    }

    /// Notifications, newest first.
    pub async fn list_notifications(
        &self,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DatabaseError> {
        self.require_admin().await?;
        let notifications: Vec<Notification> = self.db().get_collection(KEY_NOTIFICATIONS).await?;
        Ok(notifications
            .into_iter()
            .filter(|n| !unread_only || !n.read)
            .collect())
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<Notification, DatabaseError> {
        self.require_admin().await?;
        let mut notifications: Vec<Notification> =
            self.db().get_collection(KEY_NOTIFICATIONS).await?;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DatabaseError::not_found("notification", id))?;
        notification.read = true;
        let updated = notification.clone();
        self.db()
            .put_document(KEY_NOTIFICATIONS, &notifications)
            .await?;
        Ok(updated)
    }

    /// Mark every notification read. Returns how many changed.
    pub async fn mark_all_notifications_read(&self) -> Result<usize, DatabaseError> {
        self.require_admin().await?;
        let mut notifications: Vec<Notification> =
            self.db().get_collection(KEY_NOTIFICATIONS).await?;
        let mut changed = 0;
        for notification in notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        if changed > 0 {
            self.db()
                .put_document(KEY_NOTIFICATIONS, &notifications)
                .await?;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use civic_core::enums::ImpactLevel;

    use super::*;
    use crate::test_support::helpers::{login_admin, register_and_login, submit, test_service};

    #[tokio::test]
    async fn submissions_notify_newest_first() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        submit(&svc, "Dry tap", ImpactLevel::Low).await;
        submit(&svc, "Flooded road", ImpactLevel::High).await;

        login_admin(&svc).await;
        let notifications = svc.list_notifications(false).await.unwrap();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].title, "New issue submitted: Flooded road");
        assert_eq!(notifications[0].kind, NotificationKind::IssueSubmitted);
        assert!(!notifications[0].read);
    }

    #[tokio::test]
    async fn mark_read_filters_unread_view() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        submit(&svc, "Dry tap", ImpactLevel::Low).await;
        submit(&svc, "Broken light", ImpactLevel::Low).await;

        login_admin(&svc).await;
        let first = svc.list_notifications(false).await.unwrap()[0].id.clone();
        let marked = svc.mark_notification_read(&first).await.unwrap();
        assert!(marked.read);
        assert_eq!(svc.list_notifications(true).await.unwrap().len(), 1);

        assert_eq!(svc.mark_all_notifications_read().await.unwrap(), 1);
        assert!(svc.list_notifications(true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn citizens_cannot_read_notifications() {
        let svc = test_service().await;
        register_and_login(&svc, "Hana", "hana@example.com").await;
        let err = svc.list_notifications(false).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));
    }

    #[tokio::test]
    async fn unknown_notification_is_not_found() {
        let svc = test_service().await;
        login_admin(&svc).await;
        let err = svc.mark_notification_read("ntf-00000000").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
