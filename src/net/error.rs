//! Typed failures for API calls.
//!
//! ERROR HANDLING
//! ==============
//! The server's error bodies are loosely shaped: a JSON object with a
//! `message` field, a JSON object with an `error` field, a bare JSON string,
//! plain text, or something unrecognizable. They are modeled here as a
//! tagged union with one extraction function instead of speculative field
//! access scattered through the pages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::Deserialize;

/// Category of an API failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced an HTTP response (network, build, parse).
    Transport,
    /// The server answered with a non-success status.
    Status(u16),
    /// The call was made during a server-side render pass.
    Unavailable,
}

/// A failed API call, carrying a user-presentable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    /// Network-level failure with no HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self { kind: ApiErrorKind::Transport, message: message.into() }
    }

    /// Non-success HTTP status; extracts a display message from `body`.
    pub fn status(status: u16, body: &str) -> Self {
        let fallback = format!("request failed: {status}");
        Self {
            kind: ApiErrorKind::Status(status),
            message: extract_error_message(body, &fallback),
        }
    }

    /// Stub error returned by SSR builds, where no HTTP layer exists.
    pub fn unavailable() -> Self {
        Self {
            kind: ApiErrorKind::Unavailable,
            message: "not available on the server".to_owned(),
        }
    }

    /// True for a 401 response — the caller decides between a redirect to
    /// login and a session/credentials message.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Status(401))
    }

    /// HTTP status code, when the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Status(status) => Some(status),
            ApiErrorKind::Transport | ApiErrorKind::Unavailable => None,
        }
    }

    /// Message to show the user: the server-extracted message for status
    /// errors, `fallback` when there was no HTTP response to extract from.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.kind {
            ApiErrorKind::Status(_) => self.message.clone(),
            ApiErrorKind::Transport | ApiErrorKind::Unavailable => fallback.to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Known shapes of server error bodies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message { message: String },
    Tagged { error: String },
    Plain(String),
}

/// Extract a display message from an error body, falling back when the body
/// is empty, blank, or an unrecognized JSON shape.
fn extract_error_message(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_owned();
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
        let message = match parsed {
            ErrorBody::Message { message } => message,
            ErrorBody::Tagged { error } => error,
            ErrorBody::Plain(text) => text,
        };
        if message.trim().is_empty() {
            return fallback.to_owned();
        }
        return message;
    }

    // Valid JSON of an unknown shape gives the fallback; anything that is
    // not JSON at all is a raw text body and is shown verbatim.
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}
