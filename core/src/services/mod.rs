pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{AccessTokenCodec, RefreshTokenManager};
