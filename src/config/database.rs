//! Database configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Minimum connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Create the database file when it does not exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Run migrations on connect
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Database file opened directly, bypassing URL parsing of `url`
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        }
    }

    /// Configuration for a database file at `path`.
    ///
    /// The path is kept as-is for opening, so file names containing URL
    /// syntax such as `?` or `#` still work; `url` is only descriptive.
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self {
            url: format!("sqlite://{}", path.as_ref().display()),
            path: Some(path.as_ref().to_path_buf()),
            ..Default::default()
        }
    }

    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// True when the URL names an in-memory database.
    ///
    /// Such a database lives exactly as long as its connection.
    pub fn is_in_memory(&self) -> bool {
        if self.path.is_some() {
            return false;
        }
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::EmptyPool);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.is_in_memory() && self.max_connections > 1 {
            return Err(ValidationError::SharedInMemoryPool);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            create_if_missing: true,
            run_migrations: true,
            path: None,
        }
    }
}

fn default_url() -> String {
    "sqlite://foodChain.db".to_string()
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
