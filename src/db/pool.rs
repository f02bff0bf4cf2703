//! Async database connection pool implementation.
//!
//! Uses the bb8 pool manager from diesel_async. SQLite has no native async
//! driver, so every connection is a `SqliteConnection` behind
//! `SyncConnectionWrapper`, which runs queries on the blocking thread pool.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, PoolError};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Connection type handed out by the pool.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap.
pub type AsyncDbPool = Pool<DbConnection>;

/// Applies per-connection pragmas when bb8 opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout_ms: u32,
}

impl bb8::CustomizeConnection<DbConnection, PoolError> for SqlitePragmas {
    fn on_acquire<'a>(
        &'a self,
        conn: &'a mut DbConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), PoolError>> + Send + 'a>> {
        Box::pin(async move {
            diesel::sql_query(format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms))
                .execute(conn)
                .await
                .map_err(PoolError::QueryError)?;
            diesel::sql_query("PRAGMA foreign_keys = ON")
                .execute(conn)
                .await
                .map_err(PoolError::QueryError)?;
            Ok(())
        })
    }
}

/// Creates an async connection pool for the configured SQLite file.
///
/// # Errors
///
/// - `AppError::ConnectionPool` - If the pool cannot open its initial connections
pub async fn establish_async_connection_pool(config: &DatabaseConfig) -> AppResult<AsyncDbPool> {
    let manager = AsyncDieselConnectionManager::<DbConnection>::new(config.sqlite_path());

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout_ms: config.busy_timeout_ms,
        }))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::from(e),
        })?;

    tracing::debug!(
        path = config.sqlite_path(),
        max_connections = config.max_connections,
        "Database pool established"
    );

    Ok(pool)
}
