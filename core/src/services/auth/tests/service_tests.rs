use std::sync::Arc;

use cb_shared::config::JwtConfig;

use crate::domain::entities::identity::{Identity, NewAccount};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockIdentityProvider, MockTokenRepository};
use crate::services::auth::AuthService;
use crate::services::token::{AccessTokenCodec, RefreshTokenManager};

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "service-test-secret".into(),
        issuer: "crewboard-test".into(),
        access_token_expiry: 900,
        refresh_token_expiry: 1209600,
        bcrypt_cost: 4,
    }
}

fn build_service(
    identities: MockIdentityProvider,
) -> AuthService<MockIdentityProvider, MockTokenRepository> {
    let config = test_config();
    let codec = Arc::new(AccessTokenCodec::new(&config));
    let refresh = RefreshTokenManager::new(MockTokenRepository::new(), &config);
    AuthService::new(Arc::new(identities), codec, refresh)
}

async fn seeded_service() -> AuthService<MockIdentityProvider, MockTokenRepository> {
    let identities = MockIdentityProvider::new();
    identities
        .add_account(
            "ada",
            "correct horse battery",
            Identity {
                id: 42,
                display_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                roles: vec!["member".into()],
            },
        )
        .await;
    build_service(identities)
}

#[tokio::test]
async fn test_login_issues_token_pair() {
    let service = seeded_service().await;

    let bundle = service.login("ada", "correct horse battery").await.unwrap();

    assert_eq!(bundle.identity.id, 42);
    assert_eq!(bundle.access_claims.sub, "42");
    assert_eq!(bundle.access_claims.scope, vec!["member".to_string()]);
    assert_eq!(bundle.refresh_jti.len(), 64);

    let claims = service.validate_access_token(&bundle.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 42);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let service = seeded_service().await;

    let wrong_password = service.login("ada", "nope").await;
    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    let unknown_user = service.login("grace", "correct horse battery").await;
    assert!(matches!(
        unknown_user,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_refresh_rotates_and_consumes_token() {
    let service = seeded_service().await;
    let bundle = service.login("ada", "correct horse battery").await.unwrap();

    let refreshed = service
        .refresh(42, &bundle.refresh_token, &bundle.refresh_jti)
        .await
        .unwrap();
    assert_ne!(refreshed.refresh_jti, bundle.refresh_jti);
    assert_eq!(refreshed.identity.id, 42);

    // the consumed token is dead
    let replay = service
        .refresh(42, &bundle.refresh_token, &bundle.refresh_jti)
        .await;
    assert!(matches!(
        replay,
        Err(DomainError::Token(TokenError::RefreshRevoked))
    ));

    // the new one still works
    assert!(service
        .refresh(42, &refreshed.refresh_token, &refreshed.refresh_jti)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_refresh_picks_up_role_changes() {
    let identities = MockIdentityProvider::new();
    identities
        .add_account(
            "ada",
            "pw-is-long-enough",
            Identity {
                id: 42,
                display_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                roles: vec!["member".into()],
            },
        )
        .await;
    let roles_handle = identities.clone();
    let service = build_service(identities);

    let bundle = service.login("ada", "pw-is-long-enough").await.unwrap();
    assert_eq!(bundle.access_claims.scope, vec!["member".to_string()]);

    roles_handle
        .set_roles(42, vec!["member".into(), "editor".into()])
        .await;

    let refreshed = service
        .refresh(42, &bundle.refresh_token, &bundle.refresh_jti)
        .await
        .unwrap();
    assert_eq!(
        refreshed.access_claims.scope,
        vec!["member".to_string(), "editor".to_string()]
    );
}

#[tokio::test]
async fn test_signup_creates_member_account() {
    let service = seeded_service().await;

    let identity = service
        .signup(NewAccount {
            email: "grace@example.com".into(),
            password: "long enough pw".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
        })
        .await
        .unwrap();

    assert_eq!(identity.display_name, "Grace Hopper");
    assert_eq!(identity.roles, vec!["member".to_string()]);

    // the fresh account can log in
    assert!(service
        .login("grace@example.com", "long enough pw")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_signup_rejects_taken_email() {
    let service = seeded_service().await;

    let result = service
        .signup(NewAccount {
            email: "ada@example.com".into(),
            password: "long enough pw".into(),
            first_name: "Other".into(),
            last_name: "Ada".into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailTaken))
    ));
}

#[tokio::test]
async fn test_signup_validates_inputs() {
    let service = seeded_service().await;

    let bad_email = service
        .signup(NewAccount {
            email: "not-an-email".into(),
            password: "long enough pw".into(),
            first_name: "X".into(),
            last_name: "Y".into(),
        })
        .await;
    assert!(matches!(
        bad_email,
        Err(DomainError::Auth(AuthError::Validation { ref field })) if field == "email"
    ));

    let short_password = service
        .signup(NewAccount {
            email: "x@example.com".into(),
            password: "short".into(),
            first_name: "X".into(),
            last_name: "Y".into(),
        })
        .await;
    assert!(matches!(
        short_password,
        Err(DomainError::Auth(AuthError::Validation { ref field })) if field == "password"
    ));
}
