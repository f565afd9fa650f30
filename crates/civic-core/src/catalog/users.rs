use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::enums::Role;

/// Criteria for the admin user directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive over name and email; plain substring over phone.
    pub search: Option<String>,
    pub role: Option<Role>,
}

/// Return users matching `criteria`, in their input order.
#[must_use]
pub fn filter_users(users: &[User], criteria: &UserFilter) -> Vec<User> {
    let search = criteria
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());
    let lowered = search.map(str::to_lowercase);

    users
        .iter()
        .filter(|user| {
            let search_hit = match (search, lowered.as_deref()) {
                (Some(raw), Some(term)) => {
                    user.name.to_lowercase().contains(term)
                        || user.email.to_lowercase().contains(term)
                        || user.phone.as_deref().is_some_and(|phone| phone.contains(raw))
                }
                _ => true,
            };
            search_hit && criteria.role.is_none_or(|role| user.role == role)
        })
        .cloned()
        .collect()
}
