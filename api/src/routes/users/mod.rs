//! Authenticated user endpoints.

pub mod me;
pub mod search;
