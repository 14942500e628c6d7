//! Networking modules for the detection/auth HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the typed REST calls, `error` classifies their failures, and
//! `types` defines the shared wire schema. The server is an opaque
//! collaborator; nothing here contains detection logic.

pub mod api;
pub mod error;
pub mod types;
