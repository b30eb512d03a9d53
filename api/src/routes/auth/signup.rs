use actix_web::{web, HttpResponse};
use validator::Validate;

use cb_core::domain::entities::identity::NewAccount;
use cb_core::repositories::{IdentityProvider, TokenRepository};
use cb_shared::types::ErrorResponse;

use crate::dto::auth_dto::SignupRequest;
use crate::dto::user_dto::UserSummary;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new account with the default role. Does not log the account
/// in; the client follows up with a login request.
///
/// # Errors
/// - 400 Bad Request: invalid email, short password, or email already taken
pub async fn signup<I, T>(
    state: web::Data<AppState<I, T>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "request".to_string());
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            format!("Invalid value for {field}"),
        ));
    }

    let request = request.into_inner();
    let account = NewAccount {
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
    };

    match state.auth_service.signup(account).await {
        Ok(identity) => HttpResponse::Created().json(serde_json::json!({
            "user": UserSummary::from(identity),
        })),
        Err(error) => handle_domain_error(error),
    }
}
