//! Item types

use serde::{Deserialize, Serialize};

/// A persisted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the store on insert, never changes afterwards
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Copy of this item with `input` applied. The id is kept.
    pub fn with_fields(&self, input: &ItemCreate) -> Self {
        Self {
            id: self.id,
            name: input.name.clone(),
            description: input.description.clone(),
        }
    }
}

/// Create/update request body
///
/// Both fields are required; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
}

impl ItemCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: 42,
            name: "Test Item".to_string(),
            description: "Test description".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 42,
                "name": "Test Item",
                "description": "Test description"
            })
        );
    }

    #[test]
    fn test_create_requires_both_fields() {
        let missing = serde_json::from_str::<ItemCreate>(r#"{"name":"only name"}"#);
        assert!(missing.is_err());

        let wrong_type = serde_json::from_str::<ItemCreate>(r#"{"name":1,"description":"d"}"#);
        assert!(wrong_type.is_err());

        let empty = serde_json::from_str::<ItemCreate>(r#"{"name":"","description":""}"#).unwrap();
        assert_eq!(empty, ItemCreate::new("", ""));
    }

    #[test]
    fn test_with_fields_keeps_id() {
        let item = Item {
            id: 7,
            name: "old".to_string(),
            description: "old".to_string(),
        };

        let updated = item.with_fields(&ItemCreate::new("new", "newer"));
        assert_eq!(updated.id, 7);
        assert_eq!(updated.name, "new");
        assert_eq!(updated.description, "newer");
    }
}
