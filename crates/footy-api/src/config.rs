//! API server configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Errors during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    Missing(String),
}

/// API server runtime configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Database host.
    pub db_host: String,
    /// Database port.
    pub db_port: String,
    /// Database user.
    pub db_user: String,
    /// Database password.
    pub db_pass: String,
    /// Database name.
    pub db_name: String,
    /// Port the HTTP server listens on.
    pub app_port: String,
    /// API-Sports base URL.
    pub as_base_url: String,
    /// API-Sports API key.
    pub as_key: String,
    /// API-Sports host header value.
    pub as_host: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if a required variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_host: require("DB_HOST")?,
            db_port: env::var("DB_PORT").unwrap_or_else(|_| "5432".to_owned()),
            db_user: require("DB_USER")?,
            db_pass: require("DB_PASS")?,
            db_name: require("DB_NAME")?,
            app_port: env::var("APP_PORT").unwrap_or_else(|_| "5000".to_owned()),
            as_base_url: require("AS_BASE_URL")?,
            as_key: require("AS_KEY")?,
            as_host: require("AS_HOST")?,
        })
    }

    /// Postgres connection URL assembled from the DB_* parts.
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }

    /// TCP address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.app_port)
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name.to_owned()))
}
