//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. The pool
//! connects lazily: construction never touches the network, and an
//! unreachable database surfaces as an error on the first query.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DbConfig;

/// Default maximum connections for the pool.
/// Kept low for single-consumer tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a MySQL connection pool from config.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env());
/// ```
pub fn create_pool(config: &DbConfig) -> MySqlPool {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS)
}

/// Create a MySQL connection pool with a custom connection limit.
pub fn create_pool_with_options(config: &DbConfig, max_connections: u32) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(config.connect_options())
}
