use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use super::store::StoreError;

const CREATE_RECORDS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS records (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        accessory TEXT
    )
"#;

const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS records_name_idx ON records (name, id)";

/// Connection setup and schema bootstrap for the Postgres store
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a connection pool from the database configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
        let url = config
            .url
            .as_deref()
            .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        info!("Created database pool (max_connections={})", config.max_connections);
        Ok(pool)
    }

    /// Create the records table if it does not exist yet
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
        sqlx::query(CREATE_RECORDS_TABLE).execute(pool).await?;
        sqlx::query(CREATE_NAME_INDEX).execute(pool).await?;
        info!("Records schema ready");
        Ok(())
    }
}
