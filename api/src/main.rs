use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use cb_core::services::auth::AuthService;
use cb_core::services::token::{AccessTokenCodec, RefreshTokenManager};
use cb_infra::database::connection::DatabasePool;
use cb_infra::database::mysql::{MySqlIdentityProvider, MySqlTokenRepository};
use cb_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

use cb_api::app::create_app;
use cb_api::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Crewboard API server");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }
    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();

    let pool = DatabasePool::new(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let identities = Arc::new(MySqlIdentityProvider::new(
        pool.get_pool().clone(),
        jwt_config.bcrypt_cost,
    ));
    let codec = Arc::new(AccessTokenCodec::new(&jwt_config));
    let refresh_tokens = RefreshTokenManager::new(
        MySqlTokenRepository::new(pool.get_pool().clone()),
        &jwt_config,
    );
    let auth_service = Arc::new(AuthService::new(
        identities.clone(),
        codec.clone(),
        refresh_tokens,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        codec,
        identities,
    });

    let bind_address = server_config.bind_address();
    info!("Server binding to {bind_address}");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
