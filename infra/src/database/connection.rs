//! MySQL connection pool setup

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::info;

use sn_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration (URL, pool sizing, timeouts)
///
/// # Returns
/// * `Ok(MySqlPool)` - Ready-to-use connection pool
/// * `Err(InfrastructureError)` - Connection could not be established
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}
