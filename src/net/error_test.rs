use super::*;

#[test]
fn extract_prefers_message_field() {
    assert_eq!(
        extract_error_message(r#"{"message":"email already in use"}"#, "fallback"),
        "email already in use"
    );
}

#[test]
fn extract_accepts_error_field() {
    assert_eq!(
        extract_error_message(r#"{"error":"invalid credentials"}"#, "fallback"),
        "invalid credentials"
    );
}

#[test]
fn extract_accepts_bare_json_string() {
    assert_eq!(extract_error_message(r#""nope""#, "fallback"), "nope");
}

#[test]
fn extract_shows_plain_text_body_verbatim() {
    assert_eq!(
        extract_error_message("  Bad Request: file too large  ", "fallback"),
        "Bad Request: file too large"
    );
}

#[test]
fn extract_falls_back_on_unknown_json_shape() {
    assert_eq!(extract_error_message(r#"{"code":500}"#, "fallback"), "fallback");
    assert_eq!(extract_error_message("[1,2,3]", "fallback"), "fallback");
}

#[test]
fn extract_falls_back_on_empty_or_blank_body() {
    assert_eq!(extract_error_message("", "fallback"), "fallback");
    assert_eq!(extract_error_message("   ", "fallback"), "fallback");
    assert_eq!(extract_error_message(r#"{"message":"  "}"#, "fallback"), "fallback");
}

#[test]
fn status_error_carries_code_and_extracted_message() {
    let err = ApiError::status(409, r#"{"message":"duplicate email"}"#);
    assert_eq!(err.status_code(), Some(409));
    assert_eq!(err.message, "duplicate email");
    assert!(!err.is_unauthorized());
}

#[test]
fn status_error_uses_fallback_message_on_empty_body() {
    let err = ApiError::status(502, "");
    assert_eq!(err.message, "request failed: 502");
}

#[test]
fn unauthorized_is_only_status_401() {
    assert!(ApiError::status(401, "").is_unauthorized());
    assert!(!ApiError::status(403, "").is_unauthorized());
    assert!(!ApiError::transport("offline").is_unauthorized());
    assert!(!ApiError::unavailable().is_unauthorized());
}

#[test]
fn transport_and_unavailable_have_no_status_code() {
    assert_eq!(ApiError::transport("offline").status_code(), None);
    assert_eq!(ApiError::unavailable().status_code(), None);
}

#[test]
fn user_message_prefers_server_text_over_fallback() {
    let status = ApiError::status(400, r#"{"message":"email already in use"}"#);
    assert_eq!(status.user_message("Signup failed."), "email already in use");

    let transport = ApiError::transport("JsValue(TypeError: Failed to fetch)");
    assert_eq!(transport.user_message("Signup failed."), "Signup failed.");

    assert_eq!(ApiError::unavailable().user_message("Signup failed."), "Signup failed.");
}
