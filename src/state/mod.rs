//! Shared client state.
//!
//! ARCHITECTURE
//! ============
//! `auth` is the one cross-component mutable resource (two writers, any
//! number of readers); `submit` is the per-form submission machine.

pub mod auth;
pub mod submit;
