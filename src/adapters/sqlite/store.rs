//! The shared SQLite session.
//!
//! Every repository handed out by a `SqliteStore` shares one pool, so all
//! operations see the same database.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::errors::db_error;
use super::{SqliteCompanyRepository, SqliteDevRepository, SqliteFreebieRepository};
use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pooled SQLite connection plus repository factories.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect using `config`, running migrations when it asks for them.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the configuration is invalid
    /// - `DatabaseError` if the database cannot be opened or migrated
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        config
            .validate()
            .map_err(|e| DomainError::validation("database", e.to_string()))?;

        let options = match &config.path {
            Some(path) => SqliteConnectOptions::new().filename(path),
            None => SqliteConnectOptions::from_str(&config.url).map_err(|e| {
                DomainError::validation("database.url", format!("Invalid SQLite URL: {}", e))
            })?,
        }
        .create_if_missing(config.create_if_missing)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout());

        // An in-memory database disappears with its last connection.
        if config.is_in_memory() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| db_error("Failed to open database", e))?;

        tracing::info!(url = %config.url, "Connected to database");

        let store = Self { pool };
        if config.run_migrations {
            store.migrate().await?;
        }
        Ok(store)
    }

    /// A fresh, migrated, private in-memory database.
    pub async fn in_memory() -> Result<Self, DomainError> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        MIGRATOR.run(&self.pool).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to run migrations: {}", e),
            )
        })?;
        tracing::debug!("Schema migrations applied");
        Ok(())
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn companies(&self) -> SqliteCompanyRepository {
        SqliteCompanyRepository::new(self.pool.clone())
    }

    pub fn devs(&self) -> SqliteDevRepository {
        SqliteDevRepository::new(self.pool.clone())
    }

    pub fn freebies(&self) -> SqliteFreebieRepository {
        SqliteFreebieRepository::new(self.pool.clone())
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
