//! Portal-wide settings shown to administrators.

use serde::{Deserialize, Serialize};

fn default_site_title() -> String {
    "Smart Community Service".to_string()
}

fn default_notification_email() -> String {
    "admin@example.com".to_string()
}

/// Default page size for list commands.
const fn default_items_per_page() -> u32 {
    10
}

const fn default_response_window_days() -> u32 {
    7
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalSettings {
    #[serde(default = "default_site_title")]
    pub site_title: String,

    #[serde(default = "default_notification_email")]
    pub notification_email: String,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,

    /// Resolved issues updated within this many days count toward the
    /// response rate.
    #[serde(default = "default_response_window_days")]
    pub response_window_days: u32,

    #[serde(default = "default_true")]
    pub enable_email_notifications: bool,

    #[serde(default = "default_true")]
    pub show_analytics: bool,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            notification_email: default_notification_email(),
            items_per_page: default_items_per_page(),
            response_window_days: default_response_window_days(),
            enable_email_notifications: true,
            show_analytics: true,
        }
    }
}
