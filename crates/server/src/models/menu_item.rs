//! Menu item domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::MenuItemId;

/// A catalog entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique menu item ID.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Grouping used by the category aggregation (e.g. "Dessert").
    pub category: String,
    /// Price in the shop currency. Never negative.
    pub price: Decimal,
    /// Image URL.
    pub image: Option<String>,
    /// Recipe / description text.
    pub recipe: Option<String>,
    /// When the item was added to the catalog.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a menu item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub recipe: Option<String>,
}

/// Partial fields for updating a menu item.
///
/// Absent fields keep their current value. When the id matches no row the
/// update upserts: a new row is created from the id plus whatever fields were
/// given (the store's update-or-insert contract).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub recipe: Option<String>,
}
