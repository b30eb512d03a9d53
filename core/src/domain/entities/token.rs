//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by every access token
///
/// An access token is never persisted; its validity is purely a function of
/// the signature and the `nbf`/`exp` window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Issuer
    pub iss: String,

    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Role labels granted to the subject
    pub scope: Vec<String>,

    /// Unique token identifier
    pub jti: String,
}

impl AccessClaims {
    /// Builds claims for a fresh access token with `iat = nbf = now`.
    pub fn new(user_id: i64, issuer: String, scope: Vec<String>, jti: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            iss: issuer,
            sub: user_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + ttl).timestamp(),
            scope,
            jti,
        }
    }

    /// Parses the subject claim back into a user id.
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Whether `now` falls inside the `nbf..exp` window.
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }
}

/// A freshly signed access token together with its plaintext claims
///
/// The claims copy is a convenience for callers (response payloads,
/// debugging). It must never be trusted for authorization; only the decode
/// path counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedAccessToken {
    pub token: String,
    pub claims: AccessClaims,
}

/// A freshly issued refresh token
///
/// `token` is the raw bearer credential. This struct is the only place the
/// raw value ever exists outside of its stored hash; clients must keep it.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Refresh-token record as persisted by the token store
///
/// Records are created on login or rotation, flipped to `revoked = true`
/// exactly once when consumed, and never deleted (they remain as an audit
/// trail). `jti` is globally unique and serves as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Store-assigned identifier (0 until inserted)
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Unique token identifier, the lookup key
    pub jti: String,

    /// bcrypt hash of the raw token value; the raw value is never stored
    pub token_hash: String,

    /// Expiry timestamp
    pub expires_at: DateTime<Utc>,

    /// Set once, when the token is consumed by rotation
    pub revoked: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new record awaiting insertion (`id` is assigned by the store).
    pub fn new(user_id: i64, jti: String, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            user_id,
            jti,
            token_hash,
            expires_at,
            revoked: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Live means neither revoked nor expired.
    pub fn is_live(&self) -> bool {
        !self.revoked && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_window() {
        let claims = AccessClaims::new(
            42,
            "crewboard".to_string(),
            vec!["member".to_string()],
            "abc123".to_string(),
            Duration::seconds(900),
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.iat, claims.nbf);
        assert!(claims.exp > claims.iat);
        assert!(claims.is_valid());
    }

    #[test]
    fn test_access_claims_expired() {
        let mut claims = AccessClaims::new(
            1,
            "crewboard".to_string(),
            vec![],
            "jti".to_string(),
            Duration::seconds(900),
        );
        claims.exp = Utc::now().timestamp() - 1;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_refresh_record_lifecycle() {
        let mut record = RefreshTokenRecord::new(
            7,
            "unique-jti".to_string(),
            "$2b$12$hash".to_string(),
            Utc::now() + Duration::days(14),
        );

        assert!(record.is_live());

        record.revoked = true;
        assert!(!record.is_live());
    }

    #[test]
    fn test_refresh_record_expired_is_dead() {
        let record = RefreshTokenRecord::new(
            7,
            "unique-jti".to_string(),
            "$2b$12$hash".to_string(),
            Utc::now() - Duration::seconds(1),
        );

        assert!(record.is_expired());
        assert!(!record.is_live());
    }
}
