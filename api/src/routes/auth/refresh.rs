use actix_web::{web, HttpResponse};

use cb_core::repositories::{IdentityProvider, TokenRepository};

use crate::dto::auth_dto::{AuthResponse, RefreshTokenRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a live refresh token for a new token pair. The presented token
/// is consumed even if the response is lost in transit, so a client retrying
/// with the old token gets 401 and must re-login.
///
/// # Errors
/// - 401 Unauthorized: unknown, revoked, expired, or mismatched refresh token
pub async fn refresh<I, T>(
    state: web::Data<AppState<I, T>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .refresh(request.user_id, &request.refresh_token, &request.jti)
        .await
    {
        Ok(bundle) => HttpResponse::Ok().json(AuthResponse::from(bundle)),
        Err(error) => handle_domain_error(error),
    }
}
