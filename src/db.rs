//! Connection pool lifecycle.
//!
//! One pool is created by [`connect`] at process start, cloned into the
//! stores that need it, and closed once by the server after it stops
//! accepting requests.

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool and brings the schema up to date.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "connected to Postgres"
    );
    Ok(pool)
}

pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("Postgres pool closed");
}
