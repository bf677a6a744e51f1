//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use item_types::{Item, ItemCreate};

/// Item store
///
/// `update` and `delete` take an item the caller already resolved through
/// `get_by_id`; there is no atomic update-by-id.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fails with [`ItemError::NotFound`](crate::ItemError::NotFound) when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<Item>;
    /// Up to `limit` items starting at `skip`, in insertion order.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Item>>;
    async fn create(&self, input: &ItemCreate) -> Result<Item>;
    async fn update(&self, existing: Item, input: &ItemCreate) -> Result<Item>;
    async fn delete(&self, existing: &Item) -> Result<()>;
}
