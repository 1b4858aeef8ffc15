use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}

pub async fn check_connection(pool: &DbPool) -> Result<bool, sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(pool).await.map(|_| true)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Readiness probe for the backing store
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

#[async_trait]
impl DatabaseProbe for DbPool {
    async fn is_reachable(&self) -> bool {
        match check_connection(self).await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!(error = %e, "Database readiness check failed");
                false
            }
        }
    }
}
