use super::*;

#[test]
fn can_submit_requires_a_file_and_no_inflight_upload() {
    assert!(can_submit(true, false));
    assert!(!can_submit(false, false));
    assert!(!can_submit(true, true));
    assert!(!can_submit(false, true));
}

#[test]
fn unauthorized_upload_gets_the_login_required_message() {
    let err = ApiError::status(401, "");
    assert_eq!(
        analyze_error_message(&err),
        "The server currently requires a login before running an analysis."
    );
}

#[test]
fn other_status_errors_show_the_server_message() {
    let err = ApiError::status(413, r#"{"message":"file too large"}"#);
    assert_eq!(analyze_error_message(&err), "file too large");
}

#[test]
fn transport_errors_get_the_generic_message() {
    let err = ApiError::transport("fetch failed");
    assert_eq!(analyze_error_message(&err), "Analysis request failed.");
}

#[test]
fn guide_and_faq_content_is_present() {
    assert_eq!(guide_entries().len(), 4);
    assert_eq!(faq_entries().len(), 4);
    assert!(guide_entries().iter().any(|(title, _)| title.contains("Zone D")));
}
