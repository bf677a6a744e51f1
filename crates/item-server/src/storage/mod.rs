//! Storage layer
//!
//! SQLite (embedded) for items. The cache is either an in-process DashMap
//! or Redis, picked at startup.

pub mod db;
pub mod memory;
pub mod redis_cache;

pub use db::Database;
pub use memory::MemoryCache;
pub use redis_cache::RedisCache;
