use super::*;

// =============================================================
// http_failure
// =============================================================

#[test]
fn http_failure_prefers_the_message_envelope() {
    let err = http_failure(409, r#"{"Message": "user already exists"}"#);
    assert_eq!(
        err,
        ApiError::Http { status: 409, message: "user already exists".to_owned() }
    );
}

#[test]
fn http_failure_falls_back_to_the_trimmed_raw_body() {
    let err = http_failure(500, "  internal server error\n");
    assert_eq!(
        err,
        ApiError::Http { status: 500, message: "internal server error".to_owned() }
    );
}

#[test]
fn http_failure_uses_a_placeholder_for_empty_bodies() {
    let err = http_failure(502, "   ");
    assert_eq!(err, ApiError::Http { status: 502, message: "request failed".to_owned() });
}

// =============================================================
// Display
// =============================================================

#[test]
fn http_display_is_status_then_message() {
    let err = ApiError::Http { status: 401, message: "unauthorized".to_owned() };
    assert_eq!(err.to_string(), "401 unauthorized");
}

#[test]
fn transport_and_parse_display_name_the_failure() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(
        ApiError::Parse("expected value at line 1".to_owned()).to_string(),
        "malformed response: expected value at line 1"
    );
}
