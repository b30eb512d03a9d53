//! # Infrastructure Layer
//!
//! MySQL-backed implementations of the `cb_core` repository traits plus
//! connection-pool management. Nothing in here carries business rules; the
//! crate translates between domain types and database rows.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlIdentityProvider, MySqlTokenRepository};

use thiserror::Error;

/// Errors raised while setting up infrastructure
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
