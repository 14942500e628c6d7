use super::*;

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("tok1"), "Bearer tok1");
}

#[test]
fn detection_detail_endpoint_formats_expected_path() {
    assert_eq!(detection_detail_endpoint(42), "/api/v1/detection/42");
}

#[test]
fn history_delete_endpoint_formats_expected_path() {
    assert_eq!(history_delete_endpoint(42), "/api/v1/detection/history/42");
}

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/api/v1/user/me");
    assert!(url.ends_with("/api/v1/user/me"));
    assert!(url.starts_with("http"));
}

#[test]
fn api_base_defaults_to_local_server_without_override() {
    if option_env!("PIXELPROOF_API_BASE").is_none() {
        assert_eq!(api_base(), "http://localhost:8080");
    }
}
