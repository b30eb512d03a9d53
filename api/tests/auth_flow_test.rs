//! End-to-end tests of the auth endpoints over in-memory repositories.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use cb_api::app::create_app;
use cb_api::state::AppState;
use cb_core::domain::entities::identity::Identity;
use cb_core::repositories::{MockIdentityProvider, MockTokenRepository};
use cb_core::services::auth::AuthService;
use cb_core::services::token::{AccessTokenCodec, RefreshTokenManager};
use cb_shared::config::JwtConfig;

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".into(),
        issuer: "crewboard-test".into(),
        access_token_expiry: 900,
        refresh_token_expiry: 1209600,
        bcrypt_cost: 4,
    }
}

async fn seeded_state() -> web::Data<AppState<MockIdentityProvider, MockTokenRepository>> {
    let config = test_config();

    let identities = Arc::new(MockIdentityProvider::new());
    identities
        .add_account(
            "ada@example.com",
            "correct horse battery",
            Identity {
                id: 42,
                display_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                roles: vec!["member".into()],
            },
        )
        .await;

    let codec = Arc::new(AccessTokenCodec::new(&config));
    let refresh_tokens = RefreshTokenManager::new(MockTokenRepository::new(), &config);
    let auth_service = Arc::new(AuthService::new(
        identities.clone(),
        codec.clone(),
        refresh_tokens,
    ));

    web::Data::new(AppState {
        auth_service,
        codec,
        identities,
    })
}

fn login_request() -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "username": "ada@example.com",
            "password": "correct horse battery",
        }))
}

#[actix_web::test]
async fn test_login_returns_token_pair() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request().to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert!(body["access_token"].as_str().unwrap().contains('.'));
    assert_eq!(body["access_payload"]["sub"], "42");
    assert_eq!(body["access_payload"]["iss"], "crewboard-test");
    assert_eq!(body["access_payload"]["scope"], json!(["member"]));
    assert!(!body["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(body["jti"].as_str().unwrap().len(), 64);
    assert_eq!(body["user"]["id"], 42);
    assert_eq!(body["user"]["email"], "ada@example.com");
}

#[actix_web::test]
async fn test_login_rejects_wrong_password() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "username": "ada@example.com",
            "password": "wrong",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
}

#[actix_web::test]
async fn test_refresh_rotates_and_rejects_replay() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request().to_request()).await;
    assert_eq!(resp.status(), 200);
    let login: Value = test::read_body_json(resp).await;
    let old_token = login["refresh_token"].as_str().unwrap().to_string();
    let old_jti = login["jti"].as_str().unwrap().to_string();

    let refresh_request = json!({
        "refresh_token": old_token,
        "jti": old_jti,
        "user_id": 42,
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(&refresh_request)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let refreshed: Value = test::read_body_json(resp).await;
    assert_ne!(refreshed["jti"], login["jti"]);
    assert_ne!(refreshed["refresh_token"], login["refresh_token"]);

    // the consumed token must be rejected on replay
    let replay = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(&refresh_request)
        .to_request();
    let resp = test::call_service(&app, replay).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_refresh_token");
}

#[actix_web::test]
async fn test_refresh_rejects_unknown_jti() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(json!({
            "refresh_token": "whatever",
            "jti": "not-a-real-jti",
            "user_id": 42,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_signup_then_duplicate_email() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let signup_request = json!({
        "email": "grace@example.com",
        "password": "long enough pw",
        "first_name": "Grace",
        "last_name": "Hopper",
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(&signup_request)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["name"], "Grace Hopper");
    assert_eq!(body["user"]["roles"], json!(["member"]));

    let duplicate = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(&signup_request)
        .to_request();
    let resp = test::call_service(&app, duplicate).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already registered");
}

#[actix_web::test]
async fn test_signup_rejects_short_password() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "short@example.com",
            "password": "short",
            "first_name": "S",
            "last_name": "P",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = seeded_state().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
