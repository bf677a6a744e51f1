//! Item service: persistence with a cache-aside read path

use item_core::{cache_key, CacheStore, Item, ItemCreate, ItemError, ItemStore, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ItemService {
    store: Arc<dyn ItemStore>,
    cache: Arc<dyn CacheStore>,
    /// Cache errors fail the request instead of degrading to the store
    strict_cache: bool,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            cache,
            strict_cache: false,
        }
    }

    pub fn with_strict_cache(mut self, strict: bool) -> Self {
        self.strict_cache = strict;
        self
    }

    pub async fn create_item(&self, input: &ItemCreate) -> Result<Item> {
        let item = self.store.create(input).await?;
        info!("Created item {}", item.id);

        self.cache_put(&item).await?;

        Ok(item)
    }

    /// Cached copy if present, otherwise the stored row (which is then cached).
    pub async fn get_item(&self, id: i64) -> Result<Item> {
        // Try cache first
        if let Some(item) = self.cache_get(id).await? {
            debug!("Cache hit for item {}", id);
            return Ok(item);
        }
        debug!("Cache miss for item {}", id);

        // Fall back to database
        let item = self.store.get_by_id(id).await?;
        self.cache_put(&item).await?;

        Ok(item)
    }

    /// Lists are never cached.
    pub async fn list_items(&self, skip: i64, limit: i64) -> Result<Vec<Item>> {
        self.store.list(skip, limit).await
    }

    pub async fn update_item(&self, id: i64, input: &ItemCreate) -> Result<Item> {
        let existing = self.store.get_by_id(id).await?;
        let updated = self.store.update(existing, input).await?;
        info!("Updated item {}", id);

        self.cache_put(&updated).await?;

        Ok(updated)
    }

    /// Returns the item as it was just before deletion.
    pub async fn delete_item(&self, id: i64) -> Result<Item> {
        let existing = self.store.get_by_id(id).await?;
        self.store.delete(&existing).await?;
        info!("Deleted item {}", id);

        self.cache_evict(id).await?;

        Ok(existing)
    }

    async fn cache_get(&self, id: i64) -> Result<Option<Item>> {
        let key = cache_key(id);
        let data = match self.cache.get(&key).await {
            Ok(data) => data,
            Err(e) => {
                self.degrade("read", &key, e)?;
                return Ok(None);
            }
        };

        let Some(data) = data else {
            return Ok(None);
        };

        match serde_json::from_slice::<Item>(&data) {
            Ok(item) => Ok(Some(item)),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                self.cache_evict(id).await?;
                Ok(None)
            }
        }
    }

    async fn cache_put(&self, item: &Item) -> Result<()> {
        let key = cache_key(item.id);
        let data = serde_json::to_vec(item)?;
        if let Err(e) = self.cache.set(&key, data).await {
            self.degrade("write", &key, e)?;
        }
        Ok(())
    }

    async fn cache_evict(&self, id: i64) -> Result<()> {
        let key = cache_key(id);
        if let Err(e) = self.cache.delete(&key).await {
            self.degrade("delete", &key, e)?;
        }
        Ok(())
    }

    fn degrade(&self, op: &str, key: &str, err: ItemError) -> Result<()> {
        if self.strict_cache {
            return Err(err);
        }
        warn!("Cache {} failed for {}, continuing without cache: {}", op, key, err);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, MemoryCache};
    use async_trait::async_trait;

    /// Cache that is always down
    struct UnavailableCache;

    #[async_trait]
    impl CacheStore for UnavailableCache {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(ItemError::Cache("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
            Err(ItemError::Cache("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<()> {
            Err(ItemError::Cache("connection refused".to_string()))
        }
    }

    async fn service() -> (ItemService, Arc<MemoryCache>) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let cache = Arc::new(MemoryCache::default());
        (ItemService::new(db, cache.clone()), cache)
    }

    fn cached(cache: &MemoryCache, id: i64) -> Option<Item> {
        cache
            .get(&cache_key(id))
            .map(|data| serde_json::from_slice(&data).unwrap())
    }

    #[tokio::test]
    async fn test_create_populates_cache() {
        let (service, cache) = service().await;

        let item = service
            .create_item(&ItemCreate::new("Test Item", "Test description"))
            .await
            .unwrap();

        assert_eq!(cached(&cache, item.id), Some(item));
    }

    #[tokio::test]
    async fn test_read_miss_populates_cache() {
        let (service, cache) = service().await;
        let item = service
            .create_item(&ItemCreate::new("Test Item", "Test description"))
            .await
            .unwrap();
        cache.delete(&cache_key(item.id));

        let read = service.get_item(item.id).await.unwrap();

        assert_eq!(read, item);
        assert_eq!(cached(&cache, item.id), Some(item));
    }

    #[tokio::test]
    async fn test_read_hit_skips_store() {
        let (service, cache) = service().await;
        let item = service
            .create_item(&ItemCreate::new("Stored", "row"))
            .await
            .unwrap();

        // A hit is trusted as-is, even if it disagrees with the store
        let stale = item.with_fields(&ItemCreate::new("Cached", "copy"));
        cache.set(cache_key(item.id), serde_json::to_vec(&stale).unwrap());

        assert_eq!(service.get_item(item.id).await.unwrap(), stale);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_replaced() {
        let (service, cache) = service().await;
        let item = service.create_item(&ItemCreate::new("a", "b")).await.unwrap();
        cache.set(cache_key(item.id), b"not json".to_vec());

        assert_eq!(service.get_item(item.id).await.unwrap(), item);
        assert_eq!(cached(&cache, item.id), Some(item));
    }

    #[tokio::test]
    async fn test_read_missing_item() {
        let (service, cache) = service().await;

        let err = service.get_item(42).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_cache() {
        let (service, cache) = service().await;
        let item = service
            .create_item(&ItemCreate::new("Original Item", "Original description"))
            .await
            .unwrap();

        let updated = service
            .update_item(item.id, &ItemCreate::new("Updated Item", "Updated description"))
            .await
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(cached(&cache, item.id), Some(updated.clone()));
        assert_eq!(service.get_item(item.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let (service, cache) = service().await;

        let err = service
            .update_item(7, &ItemCreate::new("x", "y"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_delete_evicts_cache() {
        let (service, cache) = service().await;
        let item = service
            .create_item(&ItemCreate::new("Test Item", "Test description"))
            .await
            .unwrap();

        let deleted = service.delete_item(item.id).await.unwrap();

        assert_eq!(deleted, item);
        assert_eq!(cached(&cache, item.id), None);
        assert!(service.get_item(item.id).await.unwrap_err().is_not_found());
        assert!(service.delete_item(item.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_bypasses_cache() {
        let (service, cache) = service().await;
        service.create_item(&ItemCreate::new("Item 1", "Description 1")).await.unwrap();
        service.create_item(&ItemCreate::new("Item 2", "Description 2")).await.unwrap();
        let before = cache.len();

        let items = service.list_items(0, 10).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(cache.len(), before);
    }

    #[tokio::test]
    async fn test_cache_outage_is_not_fatal() {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let service = ItemService::new(db, Arc::new(UnavailableCache));

        let item = service.create_item(&ItemCreate::new("a", "b")).await.unwrap();
        assert_eq!(service.get_item(item.id).await.unwrap(), item);

        let updated = service
            .update_item(item.id, &ItemCreate::new("c", "d"))
            .await
            .unwrap();
        assert_eq!(updated.name, "c");

        assert_eq!(service.delete_item(item.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_strict_cache_surfaces_outage() {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let service = ItemService::new(db, Arc::new(UnavailableCache)).with_strict_cache(true);

        let err = service.create_item(&ItemCreate::new("a", "b")).await.unwrap_err();
        assert!(matches!(err, ItemError::Cache(_)));

        // The row was written before the cache step failed
        let err = service.get_item(1).await.unwrap_err();
        assert!(matches!(err, ItemError::Cache(_)));
        assert_eq!(service.list_items(0, 10).await.unwrap().len(), 1);
    }
}
