//! Portal operations, implemented as `impl PortalService` blocks.

pub mod issue;
pub mod notification;
pub mod session;
pub mod stats;
pub mod user;
