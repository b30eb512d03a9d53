//! Access-token codec: HS256 encode and decode of time-bounded claims.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use cb_shared::config::JwtConfig;

use crate::domain::entities::token::{AccessClaims, IssuedAccessToken};
use crate::errors::{DomainResult, TokenError};

use super::generate_token_id;

/// Size of the random access-token identifier (128 bits)
const ACCESS_JTI_BYTES: usize = 16;

/// Signs and verifies access tokens with a symmetric secret
///
/// The secret is injected at construction and immutable afterwards; rotating
/// it means building a new codec, which invalidates every outstanding access
/// token. Validation is pure computation with no I/O.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    access_ttl: Duration,
}

impl AccessTokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.clone()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            issuer: config.issuer.clone(),
            access_ttl: Duration::seconds(config.access_token_expiry),
        }
    }

    /// Issue a signed access token with the configured TTL.
    ///
    /// The returned plaintext claims are a caller convenience; authorization
    /// decisions must go through [`AccessTokenCodec::validate`].
    pub fn issue(&self, user_id: i64, scopes: &[String]) -> DomainResult<IssuedAccessToken> {
        self.issue_with_ttl(user_id, scopes, self.access_ttl)
    }

    /// Issue with an explicit TTL.
    pub fn issue_with_ttl(
        &self,
        user_id: i64,
        scopes: &[String],
        ttl: Duration,
    ) -> DomainResult<IssuedAccessToken> {
        let jti = generate_token_id(ACCESS_JTI_BYTES);
        let claims = AccessClaims::new(user_id, self.issuer.clone(), scopes.to_vec(), jti, ttl);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedAccessToken { token, claims })
    }

    /// Decode and verify signature, issuer, and the `nbf..exp` window.
    ///
    /// Every failure collapses to [`TokenError::InvalidToken`]; the specific
    /// reason is logged but never surfaced.
    pub fn validate(&self, token: &str) -> DomainResult<AccessClaims> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "access token rejected");
                TokenError::InvalidToken
            })?;

        Ok(data.claims)
    }
}
