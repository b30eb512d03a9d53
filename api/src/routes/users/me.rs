use actix_web::{web, HttpResponse};

use cb_core::errors::DomainError;
use cb_core::repositories::{IdentityProvider, TokenRepository};

use crate::dto::user_dto::UserSummary;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/users/me
///
/// Returns the profile of the authenticated caller. The identity is re-read
/// from the directory rather than reconstructed from claims, so the response
/// reflects current roles even mid-way through an access token's lifetime.
pub async fn me<I, T>(state: web::Data<AppState<I, T>>, auth: AuthContext) -> HttpResponse
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    match state.identities.find_by_id(auth.user_id).await {
        Ok(Some(identity)) => HttpResponse::Ok().json(UserSummary::from(identity)),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: "user".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
