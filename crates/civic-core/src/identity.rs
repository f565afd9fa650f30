use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight signed-in user identity for cross-crate passing.
///
/// Produced by the session store and consumed by the catalog ("my issues")
/// and by admin gates. Contains only data fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Whether this user may open admin views.
    ///
    /// Admin access is granted by role, or by an email listed in
    /// `admin_emails` (compared case-insensitively).
    #[must_use]
    pub fn is_admin<S: AsRef<str>>(&self, admin_emails: &[S]) -> bool {
        self.role == Role::Admin
            || admin_emails
                .iter()
                .any(|email| email.as_ref().eq_ignore_ascii_case(&self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citizen(email: &str) -> SessionUser {
        SessionUser {
            id: "usr-00000001".into(),
            name: "Abebe".into(),
            email: email.into(),
            role: Role::Citizen,
        }
    }

    #[test]
    fn admin_role_grants_access() {
        let user = SessionUser {
            role: Role::Admin,
            ..citizen("someone@example.com")
        };
        assert!(user.is_admin::<&str>(&[]));
    }

    #[test]
    fn configured_email_grants_access_case_insensitively() {
        let user = citizen("Admin@Example.com");
        assert!(user.is_admin(&["admin@example.com"]));
    }

    #[test]
    fn plain_citizen_is_not_admin() {
        let user = citizen("citizen@example.com");
        assert!(!user.is_admin(&["admin@example.com"]));
    }
}
