//! Form input validation shared by the login and signup pages.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{LoginRequest, SignupRequest};

/// Whether the password and its confirmation field hold the same value.
/// Compared verbatim; passwords are never trimmed.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Validate login form input into a request body.
///
/// # Errors
///
/// Returns a user-facing message when the trimmed email or the password is
/// empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest {
        login: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate signup form input into a request body. The party ID is optional
/// and sent trimmed.
///
/// # Errors
///
/// Returns a user-facing message when a required field is empty or the
/// duplicated password fields disagree.
pub fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    party_id: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter name, email, and password.");
    }
    if !passwords_match(password, confirm) {
        return Err("Passwords do not match.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        login: email.to_owned(),
        password: password.to_owned(),
        party_id: party_id.trim().to_owned(),
    })
}
