//! REST API helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sending cookie
//! credentials where the endpoint needs the session. Native builds get
//! stubs so the unit-test suite runs under plain `cargo test`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`; callers render the error
//! message and leave auth state untouched. Exactly one request is in flight
//! per user action — the submission machine in the calling page guarantees
//! that, not this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, Profile, SignupRequest};
#[cfg(feature = "csr")]
use super::{error::http_failure, types::ApiMessage};

#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = "http://localhost:8080";

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(not(feature = "csr"))]
fn browser_only() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn transport(err: &gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Authenticate via `POST /login`. A 2xx response carries no payload the
/// client needs; the session cookie does the work.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn login(request: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(http_failure(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(browser_only())
    }
}

/// End the session via `POST /logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(http_failure(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(browser_only())
    }
}

/// Register via `POST /signup`. Success yields the server's message
/// envelope text for display in the form.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status (with the
/// server's message extracted from the body), or an undecodable 2xx body.
pub async fn signup(request: &SignupRequest) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/signup"))
            .json(request)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(http_failure(resp.status(), &body));
        }
        let envelope: ApiMessage = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(browser_only())
    }
}

/// Load the profile payload via `GET /profile`. Invoked by the `/profile`
/// route on every navigation there; a failure aborts that navigation.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or an
/// undecodable 2xx body.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/profile"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(http_failure(resp.status(), &body));
        }
        resp.json::<Profile>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(browser_only())
    }
}
