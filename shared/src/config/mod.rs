//! Configuration types loaded from the environment at startup.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
