//! Shared and page-level state types.
//!
//! ARCHITECTURE
//! ============
//! `auth` is the only cross-page state, provided once from the app root.
//! Everything else is owned by a single page and lives in its signals; the
//! structs here keep those transitions pure and testable.

pub mod auth;
pub mod history;
