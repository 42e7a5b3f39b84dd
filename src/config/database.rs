//! Storage settings: which backend holds users, lists and sessions, and how
//! the PostgreSQL pool is sized.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool a single server may open.
pub const MAX_POOL_SIZE: u32 = 100;

/// Where the application keeps its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process memory; everything is lost on shutdown.
    Memory,
    /// PostgreSQL through a sqlx pool.
    Postgres,
}

/// `[database]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` URL; ignored when `in_memory` is set
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Seconds before an unused connection is closed
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Seconds before any connection is recycled
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,

    /// Apply `migrations/` before serving
    #[serde(default)]
    pub run_migrations: bool,

    /// Use the in-memory stores instead of PostgreSQL
    #[serde(default)]
    pub in_memory: bool,
}

impl DatabaseConfig {
    /// Backend selected by this configuration.
    pub fn backend(&self) -> StorageBackend {
        if self.in_memory {
            StorageBackend::Memory
        } else {
            StorageBackend::Postgres
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Checks the URL and pool bounds. The in-memory backend needs neither.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend() == StorageBackend::Memory {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        let postgres_scheme = ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme));
        if !postgres_scheme {
            return Err(ValidationError::InvalidDatabaseUrl);
        }

        match (self.min_connections, self.max_connections) {
            (min, max) if min > max => Err(ValidationError::InvalidPoolSize),
            (_, max) if max > MAX_POOL_SIZE => Err(ValidationError::PoolSizeTooLarge),
            _ => Ok(()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            run_migrations: false,
            in_memory: false,
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}
