//! Inventory resource models.

use serde::{Deserialize, Serialize};

/// An inventory item as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Quantity on hand.
    pub quantity: i64,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category identifier, if assigned.
    #[serde(default)]
    pub category: Option<i64>,
    /// Denormalized category name, if assigned.
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Fields for creating or replacing an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
}

impl From<Item> for ItemDraft {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sku: item.sku,
            quantity: item.quantity,
            description: item.description,
            category: item.category,
        }
    }
}

/// An item category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
