//! Item Core Library
//!
//! Error type and port traits for the item service. Storage and cache
//! backends live in `item-server` and plug in through [`ports`].

// Re-export pure types from item-types
pub use item_types::*;

pub mod error;
pub mod ports;

pub use error::{ItemError, Result};
pub use ports::{cache_key, CacheStore, ItemStore};
