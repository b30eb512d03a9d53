//! Authentication service: login, signup, and refresh-token exchange.

use std::sync::Arc;

use crate::domain::entities::identity::{Identity, NewAccount};
use crate::domain::value_objects::AuthBundle;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{IdentityProvider, TokenRepository};
use crate::services::token::{AccessTokenCodec, RefreshTokenManager};

/// Minimum acceptable password length for self-registration
const MIN_PASSWORD_LEN: usize = 8;

/// Orchestrates credential checks and token issuance
///
/// Generic over the identity provider and token store so tests run against
/// in-memory fakes and production runs against the database.
pub struct AuthService<I: IdentityProvider, T: TokenRepository> {
    identities: Arc<I>,
    codec: Arc<AccessTokenCodec>,
    refresh_tokens: RefreshTokenManager<T>,
}

impl<I: IdentityProvider, T: TokenRepository> AuthService<I, T> {
    pub fn new(
        identities: Arc<I>,
        codec: Arc<AccessTokenCodec>,
        refresh_tokens: RefreshTokenManager<T>,
    ) -> Self {
        Self {
            identities,
            codec,
            refresh_tokens,
        }
    }

    /// Verify credentials and establish a session.
    ///
    /// Unknown usernames and wrong passwords both come back as
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthBundle> {
        let identity = self
            .identities
            .authenticate(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = identity.id, "login succeeded");
        self.establish_session(identity).await
    }

    /// Register a new account with the directory's default role.
    pub async fn signup(&self, account: NewAccount) -> DomainResult<Identity> {
        let email = account.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::Validation {
                field: "email".to_string(),
            }
            .into());
        }
        if account.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation {
                field: "password".to_string(),
            }
            .into());
        }

        if self.identities.email_exists(email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let identity = self.identities.create_account(account).await?;
        tracing::info!(user_id = identity.id, "account created");
        Ok(identity)
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// Roles are re-read from the directory, so grants and revocations take
    /// effect on the next refresh without waiting for re-login.
    pub async fn refresh(
        &self,
        user_id: i64,
        refresh_token: &str,
        jti: &str,
    ) -> DomainResult<AuthBundle> {
        let rotated = self
            .refresh_tokens
            .rotate(user_id, refresh_token, jti)
            .await?;

        let identity = self
            .identities
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let access = self.codec.issue(identity.id, &identity.roles)?;

        Ok(AuthBundle {
            access_token: access.token,
            access_claims: access.claims,
            refresh_token: rotated.token,
            refresh_jti: rotated.jti,
            identity,
        })
    }

    /// Decode an access token into its claims.
    pub fn validate_access_token(
        &self,
        token: &str,
    ) -> DomainResult<crate::domain::entities::token::AccessClaims> {
        self.codec.validate(token)
    }

    async fn establish_session(&self, identity: Identity) -> DomainResult<AuthBundle> {
        let access = self.codec.issue(identity.id, &identity.roles)?;
        let refresh = self.refresh_tokens.issue(identity.id).await?;

        Ok(AuthBundle {
            access_token: access.token,
            access_claims: access.claims,
            refresh_token: refresh.token,
            refresh_jti: refresh.jti,
            identity,
        })
    }
}
