use actix_web::{web, HttpResponse};
use validator::Validate;

use cb_core::repositories::{IdentityProvider, TokenRepository};
use cb_shared::types::ErrorResponse;

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies credentials and returns an access/refresh token pair together
/// with the caller's profile.
///
/// # Errors
/// - 400 Bad Request: empty username or password
/// - 401 Unauthorized: unknown user or wrong password (indistinguishable)
pub async fn login<I, T>(
    state: web::Data<AppState<I, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "Username and password are required",
        ));
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(bundle) => HttpResponse::Ok().json(AuthResponse::from(bundle)),
        Err(error) => handle_domain_error(error),
    }
}
