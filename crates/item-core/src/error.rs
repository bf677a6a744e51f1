//! Error types for the item service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ItemError>;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ItemError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ItemError::NotFound(_))
    }
}

impl From<serde_json::Error> for ItemError {
    fn from(e: serde_json::Error) -> Self {
        ItemError::Serialization(e.to_string())
    }
}
