//! Storage layer for the tourdesk booking service.
//!
//! Entity models and their input DTOs live in [`models`]. The
//! [`store::Storage`] trait is the single seam the API talks to; it has two
//! interchangeable backings: [`memory::MemStorage`] (process-local maps)
//! and [`repositories::PgStore`] (PostgreSQL via sqlx).

pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;
pub use memory::MemStorage;
pub use repositories::PgStore;
pub use store::{Record, Removable, Repository, Storage};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
