//! PostgreSQL access for employee remuneration records.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and establish the first connection eagerly, so an
/// unreachable database surfaces as an error here rather than on first use.
pub async fn create_pool(options: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// DDL for the `employee` table. Safe to run on every startup.
const CREATE_EMPLOYEE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS employee ( \
        id BIGSERIAL, \
        name TEXT NOT NULL, \
        department TEXT NOT NULL, \
        title TEXT NOT NULL, \
        remuneration NUMERIC(10, 2) NOT NULL, \
        expenses NUMERIC(10, 2) NOT NULL, \
        year INT NOT NULL, \
        CONSTRAINT employee_pkey PRIMARY KEY (id) \
    )";

/// Create the `employee` table if it does not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_EMPLOYEE_TABLE).execute(pool).await?;
    tracing::debug!("employee table ensured");
    Ok(())
}
