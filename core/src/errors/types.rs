//! Error types for authentication and token operations.
//!
//! Refresh-rotation failures are differentiated here for logging and tests;
//! the HTTP boundary collapses all of them to a generic 401.

use thiserror::Error;

/// Authentication and signup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Login failed; deliberately does not distinguish unknown user from bad
    /// password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid value for field: {field}")]
    Validation { field: String },
}

/// Token codec and rotation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Access-token decode failure. Structural, signature, and timing
    /// problems all collapse here; no further detail reaches the caller.
    #[error("Token invalid")]
    InvalidToken,

    #[error("Refresh token not found")]
    RefreshNotFound,

    #[error("Refresh token revoked")]
    RefreshRevoked,

    #[error("Refresh token expired")]
    RefreshExpired,

    #[error("Refresh token mismatch")]
    RefreshMismatch,

    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Token hashing failed")]
    HashingFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let err: DomainError = TokenError::RefreshRevoked.into();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::RefreshRevoked)
        ));
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
