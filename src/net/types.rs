//! Wire DTOs for the MoviesWithFriends backend.
//!
//! DESIGN
//! ======
//! Response field names mirror the server's Go-marshaled envelopes
//! (PascalCase), so serde rename attributes carry the casing instead of the
//! Rust field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Body for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub login: String,
    pub password: String,
    #[serde(rename = "partyID")]
    pub party_id: String,
}

/// The server's `{"Message": ...}` envelope, used for signup results and
/// error bodies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Payload of `GET /profile`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Login")]
    pub login: String,
}
