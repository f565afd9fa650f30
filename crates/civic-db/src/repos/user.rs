//! User repository: registration and admin directory management.

use chrono::Utc;

use civic_core::catalog::{UserFilter, filter_users};
use civic_core::entities::User;
use civic_core::enums::{AccountStatus, EntityType, Role, TrailOp};
use civic_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::records::KEY_USERS;
use crate::service::PortalService;
use crate::updates::user::{UserUpdate, UserUpdateBuilder};

impl PortalService {
    /// Register a citizen account. Emails are unique, compared case-insensitively.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(DatabaseError::InvalidState(
                "name and email are required".into(),
            ));
        }

        let mut users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        if users.iter().any(|user| user.email.eq_ignore_ascii_case(email)) {
            return Err(DatabaseError::Conflict("User already exists".into()));
        }

        let now = Utc::now();
        let user = User {
            id: self.db().generate_id(PREFIX_USER).await?,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::trim).filter(|p| !p.is_empty()).map(String::from),
            role: Role::Citizen,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        self.db().put_document(KEY_USERS, &users).await?;

        self.record(TrailOp::Create, EntityType::User, &user.id, &user, now)
            .await?;
        tracing::info!(user = %user.id, "registered user");
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        users
            .into_iter()
            .find(|user| user.id == id)
            .ok_or_else(|| DatabaseError::not_found("user", id))
    }

    /// Admin directory listing, in registration order.
    pub async fn list_users(&self, filter: &UserFilter) -> Result<Vec<User>, DatabaseError> {
        self.require_admin().await?;
        let users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        Ok(filter_users(&users, filter))
    }

    pub async fn count_users(&self) -> Result<usize, DatabaseError> {
        let users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        Ok(users.len())
    }

    pub async fn set_user_role(&self, user_id: &str, role: Role) -> Result<User, DatabaseError> {
        self.require_admin().await?;
        self.update_user(user_id, UserUpdateBuilder::new().role(role).build())
            .await
    }

    /// Enable or disable an account. Admins cannot disable themselves.
    pub async fn set_user_status(
        &self,
        user_id: &str,
        status: AccountStatus,
    ) -> Result<User, DatabaseError> {
        let admin = self.require_admin().await?;
        if admin.id == user_id && status == AccountStatus::Disabled {
            return Err(DatabaseError::InvalidState(
                "cannot disable the signed-in account".into(),
            ));
        }
        self.update_user(user_id, UserUpdateBuilder::new().status(status).build())
            .await
    }

    pub(crate) async fn update_user(
        &self,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let mut users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| DatabaseError::not_found("user", user_id))?;
        update.apply_to(user);
        user.updated_at = now;
        let updated = user.clone();
        self.db().put_document(KEY_USERS, &users).await?;

        self.record(TrailOp::Update, EntityType::User, user_id, &update, now)
            .await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{login_admin, register_and_login, test_service};

    #[tokio::test]
    async fn register_assigns_id_and_citizen_role() {
        let svc = test_service().await;
        let user = svc
            .register_user("Selam", "selam@example.com", Some(" 0911000000 "))
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.role, Role::Citizen);
        assert_eq!(user.status, AccountStatus::Active);
        assert_eq!(user.phone.as_deref(), Some("0911000000"));
        assert_eq!(svc.get_user(&user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let svc = test_service().await;
        svc.register_user("Selam", "selam@example.com", None).await.unwrap();
        let err = svc
            .register_user("Selam Again", "SELAM@example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(ref msg) if msg == "User already exists"));
        assert_eq!(svc.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let svc = test_service().await;
        let err = svc.register_user("  ", "x@example.com", None).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn list_users_requires_admin() {
        let svc = test_service().await;
        register_and_login(&svc, "Selam", "selam@example.com").await;
        let err = svc.list_users(&UserFilter::default()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_filters_directory() {
        let svc = test_service().await;
        svc.register_user("Selam", "selam@example.com", None).await.unwrap();
        svc.register_user("Dawit", "dawit@example.com", Some("0922"))
            .await
            .unwrap();
        login_admin(&svc).await;

        let filter = UserFilter {
            search: Some("DAW".into()),
            role: None,
        };
        let users = svc.list_users(&filter).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Dawit");
    }

    #[tokio::test]
    async fn admin_promotes_and_disables() {
        let svc = test_service().await;
        let selam = svc.register_user("Selam", "selam@example.com", None).await.unwrap();
        login_admin(&svc).await;

        let promoted = svc.set_user_role(&selam.id, Role::Admin).await.unwrap();
        assert_eq!(promoted.role, Role::Admin);

        let disabled = svc
            .set_user_status(&selam.id, AccountStatus::Disabled)
            .await
            .unwrap();
        assert_eq!(disabled.status, AccountStatus::Disabled);

        svc.logout().await.unwrap();
        let err = svc.login("selam@example.com").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_cannot_disable_self() {
        let svc = test_service().await;
        let admin = login_admin(&svc).await;
        let err = svc
            .set_user_status(&admin.id, AccountStatus::Disabled)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let svc = test_service().await;
        login_admin(&svc).await;
        let err = svc.set_user_role("usr-ffffffff", Role::Admin).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
