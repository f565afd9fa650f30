//! Session repository: sign-in, sign-out, and role gates.
//!
//! Sign-in is by registered email only. At most one session exists; signing
//! in again replaces it.

use chrono::Utc;

use civic_core::entities::{Session, User};
use civic_core::enums::{AccountStatus, EntityType, TrailOp};
use civic_core::identity::SessionUser;
use civic_core::ids::PREFIX_SESSION;

use crate::error::DatabaseError;
use crate::records::{KEY_SESSION, KEY_USERS};
use crate::service::PortalService;
use crate::store::SessionStore;

impl PortalService {
    /// The current session, if anyone is signed in.
    pub async fn current_session(&self) -> Result<Option<Session>, DatabaseError> {
        self.db().get_document(KEY_SESSION).await
    }

    pub async fn login(&self, email: &str) -> Result<Session, DatabaseError> {
        let users: Vec<User> = self.db().get_collection(KEY_USERS).await?;
        let user = users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email.trim()))
            .ok_or_else(|| DatabaseError::Unauthenticated("Invalid credentials".into()))?;

        if user.status == AccountStatus::Disabled {
            return Err(DatabaseError::Forbidden(format!(
                "account {} is disabled",
                user.email
            )));
        }

        let now = Utc::now();
        let session = Session {
            id: self.db().generate_id(PREFIX_SESSION).await?,
            user: user.identity(),
            started_at: now,
        };
        self.db().put_document(KEY_SESSION, &session).await?;

        self.record_in(
            &session.id,
            TrailOp::Login,
            EntityType::Session,
            &session.id,
            &session,
            now,
        )?;
        tracing::info!(user = %session.user.id, session = %session.id, "signed in");
        Ok(session)
    }

    /// End the current session. Returns the session that was ended, if any.
    pub async fn logout(&self) -> Result<Option<Session>, DatabaseError> {
        let Some(session) = self.current_session().await? else {
            return Ok(None);
        };
        self.db().delete_document(KEY_SESSION).await?;
        self.record_in(
            &session.id,
            TrailOp::Logout,
            EntityType::Session,
            &session.id,
            &serde_json::Value::Null,
            Utc::now(),
        )?;
        tracing::info!(session = %session.id, "signed out");
        Ok(Some(session))
    }

    /// The signed-in user, or `Unauthenticated`.
    pub async fn require_user(&self) -> Result<SessionUser, DatabaseError> {
        self.current_user()
            .await?
            .ok_or_else(|| DatabaseError::Unauthenticated("sign in first".into()))
    }

    /// The signed-in user if they may use admin views, else `Forbidden`.
    pub async fn require_admin(&self) -> Result<SessionUser, DatabaseError> {
        let user = self.require_user().await?;
        if user.is_admin(self.admin_emails()) {
            Ok(user)
        } else {
            Err(DatabaseError::Forbidden(format!(
                "{} is not an administrator",
                user.email
            )))
        }
    }
}
