use super::*;

#[test]
fn validate_profile_name_trims_and_requires_value() {
    assert_eq!(
        validate_profile_name("  Alice  "),
        Ok(UpdateProfileRequest { name: "Alice".to_owned() })
    );
    assert_eq!(validate_profile_name("   "), Err("Enter a name."));
}

#[test]
fn password_change_requires_every_field() {
    let err = Err("Fill in every password field.");
    assert_eq!(validate_password_change("", "new", "new"), err);
    assert_eq!(validate_password_change("old", "", "new"), err);
    assert_eq!(validate_password_change("old", "new", ""), err);
}

#[test]
fn mismatched_confirmation_short_circuits_before_any_request() {
    // The submit handler only spawns a request when this returns Ok, so a
    // mismatch is guaranteed to issue zero network requests.
    assert_eq!(
        validate_password_change("old", "new-password", "different"),
        Err("New password confirmation does not match.")
    );
}

#[test]
fn matching_passwords_build_the_request() {
    let request = validate_password_change("old", "new-password", "new-password").unwrap();
    assert_eq!(request.current_password, "old");
    assert_eq!(request.new_password, "new-password");
}

#[test]
fn withdraw_phrase_must_match_exactly_modulo_whitespace() {
    assert_eq!(validate_withdraw_phrase("delete my account"), Ok(()));
    assert_eq!(validate_withdraw_phrase("  delete my account  "), Ok(()));
    assert!(validate_withdraw_phrase("delete account").is_err());
    assert!(validate_withdraw_phrase("DELETE MY ACCOUNT").is_err());
    assert!(validate_withdraw_phrase("").is_err());
}

#[test]
fn password_errors_call_out_rejected_current_password() {
    let err = ApiError::status(401, "");
    assert_eq!(password_error_message(&err), "The current password was rejected.");

    let err = ApiError::status(400, r#"{"message":"password too short"}"#);
    assert_eq!(password_error_message(&err), "password too short");

    let err = ApiError::transport("fetch failed");
    assert_eq!(password_error_message(&err), "Password change request failed.");
}

#[test]
fn session_clears_on_first_unauthorized_profile_fetch_only() {
    let unauthorized = ApiError::status(401, "");
    assert!(should_clear_session(&unauthorized, false));
    // A second 401 after the redirect must not clear-and-redirect again.
    assert!(!should_clear_session(&unauthorized, true));

    let other = ApiError::status(500, "");
    assert!(!should_clear_session(&other, false));
    assert!(!should_clear_session(&ApiError::transport("offline"), false));
}
