//! Reusable view components shared across pages.

pub mod nav;
pub mod password_field;
