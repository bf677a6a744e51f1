//! In-memory cache using DashMap (embedded stand-in for Redis)

use async_trait::async_trait;
use dashmap::DashMap;
use item_core::CacheStore;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Simple in-memory cache with TTL support
pub struct MemoryCache {
    data: Arc<DashMap<String, CacheEntry>>,
    default_ttl: Option<Duration>,
}

struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl MemoryCache {
    /// `default_ttl` applies to every `CacheStore::set`; `None` keeps entries
    /// until they are deleted.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        let cache = Self {
            data: Arc::new(DashMap::new()),
            default_ttl,
        };

        if default_ttl.is_some() {
            cache.start_cleanup_task();
        }

        cache
    }

    /// Get a value from cache
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.data.get(key).and_then(|entry| {
            if let Some(expires) = entry.expires_at {
                if Instant::now() > expires {
                    drop(entry);
                    self.data.remove(key);
                    return None;
                }
            }
            Some(entry.value.clone())
        })
    }

    /// Set a value in cache (no TTL)
    pub fn set(&self, key: String, value: Vec<u8>) {
        self.data.insert(
            key,
            CacheEntry {
                value,
                expires_at: None,
            },
        );
    }

    /// Set a value with TTL
    pub fn set_with_ttl(&self, key: String, value: Vec<u8>, ttl: Duration) {
        self.data.insert(
            key,
            CacheEntry {
                value,
                expires_at: Some(Instant::now() + ttl),
            },
        );
    }

    /// Delete a key from cache
    pub fn delete(&self, key: &str) {
        self.data.remove(key);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn start_cleanup_task(&self) {
        let data = self.data.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;

                let now = Instant::now();
                data.retain(|_, entry| {
                    entry
                        .expires_at
                        .map(|expires| now <= expires)
                        .unwrap_or(true)
                });
            }
        });
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> item_core::Result<Option<Vec<u8>>> {
        Ok(MemoryCache::get(self, key))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> item_core::Result<()> {
        match self.default_ttl {
            Some(ttl) => self.set_with_ttl(key.to_string(), value, ttl),
            None => MemoryCache::set(self, key.to_string(), value),
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> item_core::Result<()> {
        MemoryCache::delete(self, key);
        Ok(())
    }
}
