//! Wire DTOs for the detection/auth API.
//!
//! DESIGN
//! ======
//! These types mirror the server's camelCase JSON payloads field-for-field so
//! serde round-trips stay lossless. All score fields are nullable on the
//! wire: a record can exist before every metric has been computed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Payload for `POST /api/v1/user/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Payload for `POST /api/v1/user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Opaque bearer token; the server is the sole authority on its expiry.
    pub access_token: String,
}

/// One analysis result returned by the forensics service.
///
/// Read-only to this client: records are created by upload and destroyed by
/// an explicit delete, never edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Unique record identifier.
    pub id: i64,
    /// Model verdict label (e.g. `"REAL"`, `"FAKE"`).
    pub label_name: String,
    /// Server-defined processing/risk state, surfaced as display text.
    pub state: String,
    /// Model confidence in the verdict.
    pub confidence: Option<f64>,
    /// Structural similarity between the image and its reconstruction.
    pub ssim: Option<f64>,
    /// Learned perceptual distance (higher = less natural).
    pub lpips: Option<f64>,
    /// Overall high-frequency residual magnitude.
    pub rm: Option<f64>,
    /// Peak-to-valley ratio of the residual signal.
    pub pvr: Option<f64>,
    /// URL of the uploaded image as stored by the server.
    pub original_image_url: String,
    /// URL of the generated tampering heatmap.
    pub heatmap_image_url: String,
}

/// The authenticated user as returned by `GET /api/v1/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account email. Immutable in this revision; rendered read-only.
    pub email: String,
    /// Display name; the only profile field the user can change.
    pub name: String,
}

/// Payload for `PATCH /api/v1/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
}

/// Payload for `PATCH /api/v1/user/me/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
