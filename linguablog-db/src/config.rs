//! Database configuration - environment loading
//!
//! Configuration is read from environment variables:
//! - `DB_HOST`: database server address (default: localhost)
//! - `DB_USER`: database user (default: root)
//! - `DB_PASS`: database password (default: empty)
//! - `DB_NAME`: schema name (default: astro_blog)

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

/// Database connection settings
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Self {
            host: var("DB_HOST", "localhost"),
            user: var("DB_USER", "root"),
            password: var("DB_PASS", ""),
            database: var("DB_NAME", "astro_blog"),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Typed connect options for sqlx.
    ///
    /// Built field by field rather than via a URL string, so credentials
    /// containing URL metacharacters need no escaping.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
