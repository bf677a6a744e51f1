//! Item Types - Pure type definitions
//!
//! Wire and storage shapes for the item resource. No runtime dependencies
//! beyond serde.

pub mod item;
pub mod pagination;

pub use item::*;
pub use pagination::*;
