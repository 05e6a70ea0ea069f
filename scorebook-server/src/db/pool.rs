//! Database connection pool management
//!
//! The pool is created lazily; no connection is opened until bootstrap
//! acquires the first one.

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a MySQL connection pool without connecting.
///
/// # Example
///
/// ```ignore
/// let options = settings.connect_options()?;
/// let pool = create_pool(options, DEFAULT_MAX_CONNECTIONS);
/// bootstrap(&pool, DEFAULT_RETRY_DELAY).await;
/// ```
pub fn create_pool(options: MySqlConnectOptions, max_connections: u32) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}
