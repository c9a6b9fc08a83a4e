//! Failure taxonomy for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Every gateway operation resolves to one of three variants; all are caught
//! at the call site and surfaced as a message. None of them mutates auth
//! state, and nothing retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ApiMessage;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, fetch
    /// rejection, request construction failure).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{status} {message}")]
    Http { status: u16, message: String },

    /// A 2xx response carried a body the client could not decode.
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Build the `Http` variant from a non-2xx response body. Prefers the JSON
/// `Message` envelope, falls back to the trimmed raw body, and uses a
/// placeholder when the body is empty.
pub fn http_failure(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ApiMessage>(body) {
        Ok(envelope) => envelope.message,
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "request failed".to_owned()
            } else {
                trimmed.to_owned()
            }
        }
    };
    ApiError::Http { status, message }
}
