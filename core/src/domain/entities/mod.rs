pub mod identity;
pub mod token;

pub use identity::{Identity, NewAccount};
pub use token::{AccessClaims, IssuedAccessToken, IssuedRefreshToken, RefreshTokenRecord};
