//! Browser glue and pure helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session token and its change notifications; `format`
//! holds the small presentation helpers the report views share.

pub mod auth;
pub mod format;
