//! Maps domain errors onto HTTP responses.

use actix_web::HttpResponse;

use cb_core::errors::{AuthError, DomainError, TokenError};
use cb_shared::types::ErrorResponse;

/// Convert a domain error into its HTTP response.
///
/// Refresh-token failures are deliberately collapsed into a single 401 body
/// so callers cannot probe the store for which jti values exist. Storage and
/// internal failures must never surface as 401; a caller retrying with the
/// same credentials against a flaky database has not been rejected.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "invalid_credentials",
                    "Invalid username or password",
                ))
            }
            AuthError::EmailTaken => HttpResponse::BadRequest().json(ErrorResponse::new(
                "email_taken",
                "Email already registered",
            )),
            AuthError::Validation { field } => HttpResponse::BadRequest().json(
                ErrorResponse::new("validation_error", format!("Invalid value for {field}")),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::InvalidToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
                "invalid_token",
                "Invalid or expired token",
            )),
            TokenError::RefreshNotFound
            | TokenError::RefreshRevoked
            | TokenError::RefreshExpired
            | TokenError::RefreshMismatch => {
                log::warn!("refresh rejected: {token_error}");
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "invalid_refresh_token",
                    "Refresh token is invalid or expired",
                ))
            }
            TokenError::GenerationFailed | TokenError::HashingFailed => {
                log::error!("token processing failed: {token_error}");
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "token_error",
                    "Token processing failed",
                ))
            }
        },
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),
        DomainError::Database { message } => {
            log::error!("database error: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "database_error",
                "A storage error occurred",
            ))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}
