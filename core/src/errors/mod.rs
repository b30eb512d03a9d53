//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Infrastructure failures (`Database`, `Internal`) are deliberately distinct
/// from authentication failures so the HTTP boundary can map them to 5xx
/// instead of 401.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
