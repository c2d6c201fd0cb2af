//! Cart entry domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{CartEntryId, Email, MenuItemId};

/// A pending cart line, owned by a user email.
///
/// The price and name are denormalized from the menu item at add-to-cart
/// time, so later catalog edits do not change what the cart shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Unique cart entry ID.
    pub id: CartEntryId,
    /// Owning user's email.
    pub user_email: Email,
    /// The menu item this line refers to.
    pub menu_id: MenuItemId,
    /// Dish name as shown at add time.
    pub name: String,
    /// Price as shown at add time.
    pub price: Decimal,
    /// When the line was added.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a cart entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartEntry {
    pub user_email: Email,
    pub menu_id: MenuItemId,
    pub name: String,
    pub price: Decimal,
}
