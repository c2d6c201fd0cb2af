//! Domain types for the ordering API.
//!
//! These types represent validated domain objects separate from database row
//! types; the `db` repositories convert rows into them.

pub mod cart_entry;
pub mod menu_item;
pub mod payment;
pub mod user;

pub use cart_entry::{CartEntry, NewCartEntry};
pub use menu_item::{MenuItem, MenuItemPatch, NewMenuItem};
pub use payment::{NewPayment, Payment};
pub use user::User;
