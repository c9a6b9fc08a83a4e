use super::*;
use crate::net::error::ApiError;

// =============================================================
// Failure messages
// =============================================================

#[test]
fn signup_failed_message_carries_status_and_server_text() {
    let err = ApiError::Http { status: 409, message: "user already exists".to_owned() };
    assert_eq!(signup_failed_message(&err), "Signup failed: 409 user already exists");
}

// =============================================================
// Live confirm-field validity
// =============================================================

#[test]
fn confirm_field_is_invalid_only_when_non_empty_and_different() {
    // Mirrors the derived signal: an untouched confirm field shows no error.
    let invalid = |password: &str, confirm: &str| {
        !confirm.is_empty() && !passwords_match(password, confirm)
    };
    assert!(!invalid("secret", ""));
    assert!(!invalid("secret", "secret"));
    assert!(invalid("secret", "secre"));
}
