//! REST operations against the detection/auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the token store immediately before each request goes out.
//! Server-side (SSR): stubs returning [`ApiError::unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<T, ApiError>`; callers interpret the
//! failure (notably a 401) at the page boundary. No retries happen here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    DetectionRecord, LoginRequest, SignupRequest, TokenResponse, UpdatePasswordRequest,
    UpdateProfileRequest, UserProfile,
};

/// Compile-time API origin, the analog of a build-time public env var.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("PIXELPROOF_API_BASE").unwrap_or("http://localhost:8080")
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn detection_detail_endpoint(id: i64) -> String {
    format!("/api/v1/detection/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn history_delete_endpoint(id: i64) -> String {
    format!("/api/v1/detection/history/{id}")
}

/// Attach `Authorization: Bearer <token>` when a token is present.
///
/// Reads the token store at the last moment before sending so a login or
/// logout in this tab is always reflected by the very next request.
#[cfg(feature = "hydrate")]
fn with_auth(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::get_access_token() {
        Some(token) => request.header("Authorization", &bearer_header_value(&token)),
        None => request,
    }
}

/// Turn a non-success response into an [`ApiError`] with its body message.
#[cfg(feature = "hydrate")]
async fn into_api_result(
    response: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("api call failed with status {status}");
    Err(ApiError::status(status, &body))
}

/// Create an account via `POST /api/v1/user/signup`. Returns the new user id.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the
/// signup (e.g. duplicate email).
pub async fn signup(request: &SignupRequest) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::post(&api_url("/api/v1/user/signup")))
            .json(request)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<i64>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Exchange credentials for a bearer token via `POST /api/v1/user/login`.
///
/// The caller owns what happens to the token; this function does not store it.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are
/// rejected.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::post(&api_url("/api/v1/user/login")))
            .json(request)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Upload an image for analysis via `POST /api/v1/detection/upload`.
///
/// The file travels as the multipart field `"file"`; the browser supplies the
/// multipart boundary. Returns the freshly created detection record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the server rejects the upload (401 when analysis requires a login).
#[cfg(feature = "hydrate")]
pub async fn upload_detection_image(file: &web_sys::File) -> Result<DetectionRecord, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::transport("could not build upload form"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::transport("could not attach file to upload form"))?;

    let response = with_auth(gloo_net::http::Request::post(&api_url("/api/v1/detection/upload")))
        .body(form)
        .map_err(|e| ApiError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    let response = into_api_result(response).await?;
    response
        .json::<DetectionRecord>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// Fetch all of the user's detection records via `GET /api/v1/detection/history`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the session is rejected.
pub async fn get_detection_history() -> Result<Vec<DetectionRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::get(&api_url("/api/v1/detection/history")))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<Vec<DetectionRecord>>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch one detection record via `GET /api/v1/detection/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the record is gone.
pub async fn get_detection_detail(id: i64) -> Result<DetectionRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::get(&api_url(&detection_detail_endpoint(id))))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<DetectionRecord>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Delete one history entry via `DELETE /api/v1/detection/history/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_detection_history(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::delete(&api_url(&history_delete_endpoint(id))))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        into_api_result(response).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Fetch the authenticated user's profile via `GET /api/v1/user/me`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a 401 here means the session token is no longer
/// valid and the caller should clear it.
pub async fn get_my_profile() -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::get(&api_url("/api/v1/user/me")))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Update the profile name via `PATCH /api/v1/user/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or validation rejects it.
pub async fn update_my_profile(request: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::patch(&api_url("/api/v1/user/me")))
            .json(request)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let response = into_api_result(response).await?;
        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Change the account password via `PATCH /api/v1/user/me/password`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a 401 here means the current password was
/// rejected.
pub async fn update_my_password(request: &UpdatePasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::patch(&api_url("/api/v1/user/me/password")))
            .json(request)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        into_api_result(response).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Delete the account via `DELETE /api/v1/user/me`.
///
/// The caller is responsible for clearing the now-dead session token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn withdraw() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_auth(gloo_net::http::Request::delete(&api_url("/api/v1/user/me")))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        into_api_result(response).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}
