//! Application factory
//!
//! Builds the actix-web `App` with all routes and middleware wired up.
//! Generic over the repository implementations so integration tests can run
//! the full HTTP stack against in-memory fakes.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use cb_core::repositories::{IdentityProvider, TokenRepository};
use cb_shared::types::ErrorResponse;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, refresh::refresh, signup::signup};
use crate::routes::users::{me::me, search::search};
use crate::state::AppState;

/// Create and configure the application with all dependencies.
pub fn create_app<I, T>(
    app_state: web::Data<AppState<I, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    let cors = create_cors();
    let jwt_auth = JwtAuth::new(app_state.codec.clone());

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<I, T>))
                        .route("/signup", web::post().to(signup::<I, T>))
                        .route("/refresh", web::post().to(refresh::<I, T>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(jwt_auth)
                        .route("/me", web::get().to(me::<I, T>))
                        .route("/search", web::get().to(search::<I, T>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "crewboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
