/**
 * Server Configuration
 *
 * Configuration is read from environment variables (after `.env` has been
 * loaded by the binary):
 *
 * - `SERVER_PORT` - listening port, default 3000
 * - `DATABASE_URL` - PostgreSQL connection string; when absent the server
 *   keeps records in memory
 * - `SNAPSHOT_CHANNEL_CAPACITY` - snapshots buffered per subscriber,
 *   default 64
 *
 * # Error Handling
 *
 * Malformed values are configuration errors. A database that cannot be
 * reached is not: it is logged and the server continues with the in-memory
 * store.
 */

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::store::{MemoryCollection, PgCollection, SharedStore, StoreError};
use crate::shared::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SNAPSHOT_CAPACITY: usize = 64;

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub snapshot_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            snapshot_capacity: DEFAULT_SNAPSHOT_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            port: parse_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
            database_url,
            snapshot_capacity: parse_or(&lookup, "SNAPSHOT_CHANNEL_CAPACITY", DEFAULT_SNAPSHOT_CAPACITY)?,
        })
    }

    /// Address to bind the listener to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => {
            tracing::debug!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

/// Build the document store described by the configuration
///
/// Connects to PostgreSQL and runs migrations when `DATABASE_URL` is set.
/// Any failure along the way is logged and the in-memory store is used
/// instead.
pub async fn load_store(config: &ServerConfig) -> SharedStore {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Records will be kept in memory.");
        return Arc::new(MemoryCollection::new(config.snapshot_capacity));
    };

    match connect_postgres(database_url, config.snapshot_capacity).await {
        Ok(store) => {
            tracing::info!("Using PostgreSQL document store");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Failed to initialise PostgreSQL store: {}", e);
            tracing::warn!("Records will be kept in memory.");
            Arc::new(MemoryCollection::new(config.snapshot_capacity))
        }
    }
}

async fn connect_postgres(database_url: &str, capacity: usize) -> Result<PgCollection, StoreError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("migration failed: {}", e)))?;

    PgCollection::connect(pool, capacity).await
}
