//! Port traits (interfaces) for dependency injection

pub mod cache;
pub mod storage;

pub use cache::{cache_key, CacheStore, CACHE_KEY_PREFIX};
pub use storage::ItemStore;
