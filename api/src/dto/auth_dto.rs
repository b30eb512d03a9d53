use serde::{Deserialize, Serialize};
use validator::Validate;

use cb_core::domain::entities::token::AccessClaims;
use cb_core::domain::value_objects::AuthBundle;

use super::user_dto::UserSummary;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Body of POST /auth/refresh
///
/// `jti` selects the stored record; `refresh_token` is the raw secret that
/// must match its hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
    pub jti: String,
    pub user_id: i64,
}

/// Token-pair payload returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub access_payload: AccessClaims,
    pub refresh_token: String,
    pub jti: String,
    pub user: UserSummary,
}

impl From<AuthBundle> for AuthResponse {
    fn from(bundle: AuthBundle) -> Self {
        Self {
            access_token: bundle.access_token,
            access_payload: bundle.access_claims,
            refresh_token: bundle.refresh_token,
            jti: bundle.refresh_jti,
            user: UserSummary::from(bundle.identity),
        }
    }
}
