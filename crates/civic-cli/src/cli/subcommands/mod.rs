mod admin;
mod auth;
mod issue;
mod priority;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use issue::IssueCommands;
pub use priority::PriorityCommands;
