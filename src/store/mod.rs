//! SQLite pool, embedded migrations, and one repository per entity.

mod pizza;
mod restaurant;
mod restaurant_pizza;

pub use pizza::PizzaStore;
pub use restaurant::RestaurantStore;
pub use restaurant_pizza::RestaurantPizzaStore;

use crate::error::AppError;
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Storage capabilities shared by every entity. Writes run in their own
/// transaction; an error drops the transaction, which rolls it back.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send;
    type New: Send + Sync;

    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Entity>, AppError>;

    async fn find_all(&self) -> Result<Vec<Self::Entity>, AppError>;

    async fn save(&self, new: &Self::New) -> Result<Self::Entity, AppError>;

    /// Returns false when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool with foreign keys enforced on every connection. The file is
/// created if missing. In-memory databases are pinned to one connection that
/// never expires, since each connection would otherwise see its own database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool = SqlitePoolOptions::new().max_connections(max_connections.max(1));
    if is_in_memory(database_url) {
        pool = pool
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool.connect_with(options).await?;
    tracing::debug!(database_url = %database_url, "database pool opened");
    Ok(pool)
}

/// Apply the embedded migrations under `migrations/`. Already-applied
/// migrations are skipped.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Round-trip to the database.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}
