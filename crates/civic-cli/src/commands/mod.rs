pub mod admin;
pub mod auth;
pub mod dispatch;
pub mod issue;
pub mod priority;
pub mod shared;
