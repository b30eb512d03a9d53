//! Authentication endpoints: login, signup, and token refresh.

pub mod login;
pub mod refresh;
pub mod signup;
