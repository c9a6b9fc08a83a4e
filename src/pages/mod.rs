//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components`.

pub mod home;
pub mod login;
pub mod logout;
pub mod profile;
pub mod signup;
