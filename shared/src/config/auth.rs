//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT and refresh-token configuration
///
/// The signing secret is generated once at install time (at least 64 bytes of
/// randomness) and carried in the environment, never in version control.
/// Rotating it invalidates every outstanding access token; refresh-token
/// records are independent of this secret.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret for HS256 signing
    pub secret: String,

    /// Issuer claim stamped into and required of every access token
    pub issuer: String,

    /// Access token expiry in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,

    /// bcrypt cost factor for refresh-token hashing
    pub bcrypt_cost: u32,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            issuer: String::from("crewboard"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 1209600, // 14 days
            bcrypt_cost: 12,
        }
    }
}

impl JwtConfig {
    /// Create a configuration with the given secret and defaults elsewhere
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            bcrypt_cost: std::env::var("REFRESH_TOKEN_BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }

    /// Whether the placeholder development secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}
