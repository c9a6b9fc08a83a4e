use super::*;

// =============================================================
// passwords_match
// =============================================================

#[test]
fn passwords_match_compares_verbatim() {
    assert!(passwords_match("hunter2", "hunter2"));
    assert!(!passwords_match("hunter2", "hunter3"));
    assert!(!passwords_match("hunter2", "hunter2 "));
}

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn login_input_trims_email_and_keeps_password_verbatim() {
    let request = validate_login_input("  user@example.com  ", "pass word").unwrap();
    assert_eq!(request.login, "user@example.com");
    assert_eq!(request.password, "pass word");
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

// =============================================================
// validate_signup_input
// =============================================================

#[test]
fn signup_input_builds_trimmed_request() {
    let request =
        validate_signup_input(" Alice ", " a@b.com ", "secret", "secret", " party-7 ").unwrap();
    assert_eq!(request.name, "Alice");
    assert_eq!(request.login, "a@b.com");
    assert_eq!(request.password, "secret");
    assert_eq!(request.party_id, "party-7");
}

#[test]
fn signup_input_allows_empty_party_id() {
    let request = validate_signup_input("Alice", "a@b.com", "secret", "secret", "  ").unwrap();
    assert_eq!(request.party_id, "");
}

#[test]
fn signup_input_requires_name_email_and_password() {
    assert_eq!(
        validate_signup_input("", "a@b.com", "secret", "secret", ""),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Alice", "   ", "secret", "secret", ""),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Alice", "a@b.com", "", "", ""),
        Err("Enter name, email, and password.")
    );
}

#[test]
fn signup_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_signup_input("Alice", "a@b.com", "secret", "secrej", ""),
        Err("Passwords do not match.")
    );
}
