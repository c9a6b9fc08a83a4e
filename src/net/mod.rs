//! Networking modules for the backend HTTP gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the four remote operations, `error` the failure taxonomy,
//! and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
