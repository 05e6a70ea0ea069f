//! Database connection settings
//!
//! Either a full `DATABASE_URL` or the discrete `DB_*` fields. The URL wins
//! when both are present.

use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};

/// Host used when `DB_HOST` is not set
pub const DEFAULT_DB_HOST: &str = "localhost";

/// MySQL default port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Where and how to connect to MySQL
#[derive(Debug, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub port: Option<u16>,
}

impl DatabaseSettings {
    /// Build sqlx connect options.
    ///
    /// Discrete fields connect with TLS required but the server certificate
    /// is not validated. A URL keeps its own `ssl-mode` parameter.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return MySqlConnectOptions::from_str(url).map_err(ConfigError::InvalidUrl);
        }

        let mut options = MySqlConnectOptions::new()
            .host(self.host.as_deref().unwrap_or(DEFAULT_DB_HOST))
            .port(self.port.unwrap_or(DEFAULT_DB_PORT))
            .ssl_mode(MySqlSslMode::Required);

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }

        Ok(options)
    }

    /// Short description for logs. Never includes the password.
    pub fn describe(&self) -> String {
        if self.url.as_deref().is_some_and(|u| !u.is_empty()) {
            return "DATABASE_URL".to_string();
        }
        format!(
            "{}:{}/{}",
            self.host.as_deref().unwrap_or(DEFAULT_DB_HOST),
            self.port.unwrap_or(DEFAULT_DB_PORT),
            self.database.as_deref().unwrap_or("")
        )
    }
}
