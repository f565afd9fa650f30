//! ID prefix constants.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, e.g. `iss-a3f8b2c1`.
//! Generation happens in `civic-db` (`PortalDb::generate_id`).

pub const PREFIX_ISSUE: &str = "iss";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_COMMENT: &str = "cmt";
pub const PREFIX_NOTIFICATION: &str = "ntf";
pub const PREFIX_SESSION: &str = "ses";

pub const ALL_PREFIXES: [&str; 5] = [
    PREFIX_ISSUE,
    PREFIX_USER,
    PREFIX_COMMENT,
    PREFIX_NOTIFICATION,
    PREFIX_SESSION,
];

/// Format a prefixed ID from a prefix and its random hex suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}
