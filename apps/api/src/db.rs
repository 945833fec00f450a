use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates the PostgreSQL pool backing the job and candidate stores.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!(
        max_connections = config.database_max_connections,
        "Connecting to PostgreSQL..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
