//! Partial-update types and their builders.
//!
//! Each update is a set of `Option` fields; only `Some` fields are applied.
//! Nullable fields use `Option<Option<T>>` so they can be cleared.

pub mod issue;
pub mod user;
