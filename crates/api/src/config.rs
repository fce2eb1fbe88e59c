use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Configuration could not be read from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL is not a valid connection string: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `9123`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Backing database connection settings.
    pub database: DatabaseConfig,
}

/// PostgreSQL connection settings.
///
/// `url`, when present, wins over the individual fields.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `9123`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `DATABASE_URL`         | unset       |
    /// | `pg_host`              | `localhost` |
    /// | `pg_port`              | `5432`      |
    /// | `pg_user`              | `postgres`  |
    /// | `pg_password`          | empty       |
    /// | `pg_dbname`            | `postgres`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", &var("PORT", "9123"), "u16")?;
        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"), "u64")?;

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: var("pg_host", "localhost"),
            port: parse_var("pg_port", &var("pg_port", "5432"), "integer port")?,
            user: var("pg_user", "postgres"),
            password: var("pg_password", ""),
            dbname: var("pg_dbname", "postgres"),
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            database,
        })
    }
}

impl DatabaseConfig {
    /// Connection options for the pool. TLS is disabled unless `DATABASE_URL`
    /// asks for it.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable))
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}
