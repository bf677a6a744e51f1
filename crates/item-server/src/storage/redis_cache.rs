//! Redis-backed cache

use anyhow::{Context, Result};
use async_trait::async_trait;
use item_core::{CacheStore, ItemError};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;

/// Cache over a multiplexed, auto-reconnecting Redis connection
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    ttl: Option<Duration>,
}

impl RedisCache {
    pub async fn connect(redis_url: &str, ttl: Option<Duration>) -> Result<Self> {
        tracing::info!("Connecting to Redis at: {}", redis_url);

        let client = redis::Client::open(redis_url)
            .with_context(|| format!("Invalid Redis URL: {}", redis_url))?;
        let conn = ConnectionManager::new(client)
            .await
            .with_context(|| format!("Failed to connect to Redis at: {}", redis_url))?;

        tracing::info!("Redis connection established");

        Ok(Self { conn, ttl })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> item_core::Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(cache_error)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> item_core::Result<()> {
        let mut conn = self.conn.clone();
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = self.ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }
        cmd.query_async::<_, ()>(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, key: &str) -> item_core::Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(cache_error)
    }
}

fn cache_error(e: redis::RedisError) -> ItemError {
    ItemError::Cache(e.to_string())
}
