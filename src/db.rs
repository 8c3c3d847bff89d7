//! Database connection management and schema bootstrap

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create tables and indexes if they do not exist.
    ///
    /// The rate ledger is append-only: exchanges carry no UNIQUE constraint
    /// across (from, to, time) because repeated and derived observations are
    /// ordinary rows.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS currencies (
                id BIGSERIAL PRIMARY KEY,
                code VARCHAR(5) NOT NULL UNIQUE,
                quantifier SMALLINT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS exchanges (
                id BIGSERIAL PRIMARY KEY,
                from_id BIGINT NOT NULL REFERENCES currencies(id),
                to_id BIGINT NOT NULL REFERENCES currencies(id),
                rate NUMERIC(29, 10) NOT NULL,
                time TIMESTAMP NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_exchanges_pair_time
               ON exchanges (from_id, to_id, time DESC)"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_exchanges_to_time
               ON exchanges (to_id, time DESC)"#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Database schema initialized");
        Ok(())
    }
}
