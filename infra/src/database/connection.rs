//! Database connection pool management.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};

use cb_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// MySQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("invalid database URL: {e}")))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .connect_with(connect_options)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Simple connectivity probe for the health endpoint.
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
