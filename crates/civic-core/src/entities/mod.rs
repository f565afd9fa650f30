//! Entity structs for all portal domain objects.
//!
//! Each entity is stored as an element of a JSON array under one key of the
//! blob store (`issues`, `users`, `notifications`, `session`). Field names
//! serialize as camelCase so stored records keep the portal's JSON shape.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod issue;
mod notification;
mod session;
mod user;

pub use issue::{Comment, Issue, IssueDraft, Reporter};
pub use notification::Notification;
pub use session::Session;
pub use user::User;
