//! Refresh-token issuance and single-use rotation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use rand::RngCore;

use cb_shared::config::JwtConfig;

use crate::domain::entities::token::{IssuedRefreshToken, RefreshTokenRecord};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::generate_token_id;

/// Size of the random refresh-token identifier (256 bits)
const REFRESH_JTI_BYTES: usize = 32;

/// Entropy of the raw refresh secret before encoding
const REFRESH_SECRET_BYTES: usize = 64;

/// Issues refresh tokens and rotates them on use
///
/// Raw secrets leave this type exactly once, at issuance. Only a bcrypt hash
/// is stored, so a leaked token table cannot be replayed.
pub struct RefreshTokenManager<T: TokenRepository> {
    repository: T,
    refresh_ttl: Duration,
    bcrypt_cost: u32,
}

impl<T: TokenRepository> RefreshTokenManager<T> {
    pub fn new(repository: T, config: &JwtConfig) -> Self {
        Self {
            repository,
            refresh_ttl: Duration::seconds(config.refresh_token_expiry),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Mint a fresh refresh token for `user_id` and persist its hash.
    pub async fn issue(&self, user_id: i64) -> DomainResult<IssuedRefreshToken> {
        self.issue_with_ttl(user_id, self.refresh_ttl).await
    }

    /// Mint with an explicit TTL.
    pub async fn issue_with_ttl(
        &self,
        user_id: i64,
        ttl: Duration,
    ) -> DomainResult<IssuedRefreshToken> {
        let jti = generate_token_id(REFRESH_JTI_BYTES);

        let mut secret = [0u8; REFRESH_SECRET_BYTES];
        rand::thread_rng().fill_bytes(&mut secret);
        let raw = URL_SAFE_NO_PAD.encode(secret);

        // bcrypt only digests the first 72 bytes of input; the prefix alone
        // still carries more entropy than the hash can hold
        let hash = bcrypt::hash(&raw, self.bcrypt_cost)
            .map_err(|_| TokenError::HashingFailed)?;

        let expires_at = Utc::now() + ttl;
        let record = RefreshTokenRecord::new(user_id, jti.clone(), hash, expires_at);
        self.repository.insert(record).await?;

        Ok(IssuedRefreshToken {
            token: raw,
            jti,
            expires_at,
        })
    }

    /// Exchange a live refresh token for a new one, revoking the old.
    ///
    /// Checks run in a fixed order so each failure mode gets its own error:
    /// unknown, already revoked, expired, then secret mismatch. The final
    /// revocation is conditional, so of two concurrent rotations of the same
    /// token exactly one succeeds.
    pub async fn rotate(
        &self,
        user_id: i64,
        presented: &str,
        jti: &str,
    ) -> DomainResult<IssuedRefreshToken> {
        let record = self
            .repository
            .find_by_jti_and_user(jti, user_id)
            .await?
            .ok_or(TokenError::RefreshNotFound)?;

        if record.revoked {
            tracing::warn!(user_id, jti, "revoked refresh token presented again");
            return Err(TokenError::RefreshRevoked.into());
        }
        if record.is_expired() {
            return Err(TokenError::RefreshExpired.into());
        }

        let matches = bcrypt::verify(presented, &record.token_hash)
            .map_err(|_| TokenError::HashingFailed)?;
        if !matches {
            return Err(TokenError::RefreshMismatch.into());
        }

        // lost the race to a concurrent rotation of the same token
        if !self.repository.mark_revoked(record.id).await? {
            tracing::warn!(user_id, jti, "refresh token rotated concurrently");
            return Err(TokenError::RefreshRevoked.into());
        }

        self.issue(user_id).await
    }
}
