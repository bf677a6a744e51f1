//! Key-value cache port

use crate::Result;
use async_trait::async_trait;

pub const CACHE_KEY_PREFIX: &str = "item_";

/// Cache key for an item id, e.g. `item_42`
pub fn cache_key(id: i64) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, id)
}

/// Byte-valued key-value cache
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}
