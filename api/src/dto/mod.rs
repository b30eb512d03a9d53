//! Request and response DTOs.

pub mod auth_dto;
pub mod user_dto;

pub use auth_dto::{AuthResponse, LoginRequest, RefreshTokenRequest, SignupRequest};
pub use user_dto::{SearchQuery, UserSummary};
