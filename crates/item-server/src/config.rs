//! Server configuration
//!
//! Built-in defaults overlaid with `ITEMS_*` environment variables. Nested
//! keys use a double underscore, e.g. `ITEMS_CACHE__BACKEND=redis`.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_url: String,
    pub max_connections: u32,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis_url: String,
    /// Entry lifetime; unset means entries live until invalidated
    #[serde(default)]
    pub ttl_secs: Option<u64>,
    /// Fail requests on cache errors instead of falling back to the database
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    Redis,
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("ITEMS"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("database_url", "sqlite://items.db")?
            .set_default("max_connections", 5)?
            .set_default("cache.backend", "memory")?
            .set_default("cache.redis_url", "redis://127.0.0.1:6379/0")?
            .set_default("cache.strict", false)?
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}
