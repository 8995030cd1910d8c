//! Store configuration read from the environment.
//!
//! - `STORAGE_MODE`: `in_memory` (default) or `postgres`
//! - `DATABASE_URL`: `PostgreSQL` connection URL, required for `postgres`
//! - `DATABASE_POOL_SIZE`: maximum pooled connections (default 4)

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Where tasks and user records are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Process-local maps; contents are lost on exit.
    #[default]
    InMemory,
    /// `PostgreSQL` through Diesel.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => f.write_str("in_memory"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

/// Errors raised while reading store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `STORAGE_MODE` is not a recognised value.
    #[error("invalid STORAGE_MODE '{0}', expected in_memory or postgres")]
    InvalidStorageMode(String),
    /// `postgres` mode was selected without a database URL.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,
    /// `DATABASE_POOL_SIZE` is not a positive integer.
    #[error("invalid DATABASE_POOL_SIZE '{0}', expected a positive integer")]
    InvalidPoolSize(String),
    /// A variable holds non-UTF-8 data.
    #[error("environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),
}

/// Validated store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    storage_mode: StorageMode,
    database_url: Option<String>,
    pool_size: u32,
    connection_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::InMemory,
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or `postgres`
    /// mode lacks a database URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        })
    }

    /// Reads configuration through an injected variable lookup.
    ///
    /// Empty or whitespace-only values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or `postgres`
    /// mode lacks a database URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let read = |key: &'static str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(key)?
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty()))
        };

        let storage_mode = read("STORAGE_MODE")?
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();
        let pool_size = read("DATABASE_POOL_SIZE")?
            .map(|value| parse_pool_size(&value))
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        let config = Self {
            storage_mode,
            database_url: read("DATABASE_URL")?,
            pool_size,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a `postgres` configuration for the given URL.
    #[must_use]
    pub fn postgres(database_url: impl Into<String>) -> Self {
        Self {
            storage_mode: StorageMode::Postgres,
            database_url: Some(database_url.into()),
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    /// Sets how long the pool waits for a connection.
    ///
    /// Zero is raised to one millisecond.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout.max(Duration::from_millis(1));
        self
    }

    /// Returns the configured storage mode.
    #[must_use]
    pub const fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    /// Returns the database URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns how long the pool waits for a connection.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_mode == StorageMode::Postgres && self.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }
}

fn parse_pool_size(value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidPoolSize(value.to_owned()))
}
