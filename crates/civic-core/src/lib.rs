//! # civic-core
//!
//! Core types, priority scoring, and issue catalog logic for the civic issue portal.
//!
//! This crate provides the foundational types shared across all portal crates:
//! - Entity structs for issues, users, sessions, and notifications
//! - Enums for severity, category, status, and roles
//! - The priority engine (`compute_score`, `label_for_score`)
//! - Catalog filtering and bulk status updates over caller-owned collections
//! - Dashboard statistics
//! - ID prefix constants
//! - Cross-cutting error types
//! - Trail operation envelope for JSONL persistence

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod priority;
pub mod stats;
pub mod trail;
