//! Admin access configuration.

use serde::{Deserialize, Serialize};

fn default_admin_emails() -> Vec<String> {
    vec!["admin@example.com".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Accounts with these emails open admin views regardless of role.
    #[serde(default = "default_admin_emails")]
    pub admin_emails: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_emails: default_admin_emails(),
        }
    }
}
