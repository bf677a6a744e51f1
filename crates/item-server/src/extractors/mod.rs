//! Request extractors

pub mod validated;

pub use validated::{AppJson, AppPath, AppQuery};
