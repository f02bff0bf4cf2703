//! Database connection pool and schema migrations.
//!
//! Provides async SQLite connection pooling using diesel_async with bb8.

mod migrations;
mod pool;

pub use migrations::{
    MIGRATIONS, applied_migrations, pending_migrations, revert_migrations, run_pending_migrations,
};
pub use pool::{AsyncDbPool, DbConnection, establish_async_connection_pool};
