//! Cart route handlers.
//!
//! Cart writes are open to any client (guests build carts before logging
//! in); reads are scoped by the owner email in the query string.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use bistro_core::{CartEntryId, DeleteResult, InsertResult};

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::models::{CartEntry, NewCartEntry};
use crate::state::AppState;

/// Query parameters for listing a cart.
#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    pub email: String,
}

/// `GET /carts?email=` - the owner's pending cart entries.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CartListQuery>,
) -> Result<Json<Vec<CartEntry>>> {
    let entries = CartRepository::new(state.pool())
        .list_by_owner(&query.email)
        .await?;
    Ok(Json(entries))
}

/// `POST /carts` - add a cart entry.
pub async fn create(
    State(state): State<AppState>,
    Json(entry): Json<NewCartEntry>,
) -> Result<Json<InsertResult>> {
    if entry.price.is_sign_negative() {
        return Err(AppError::BadRequest(
            "price must be non-negative".to_string(),
        ));
    }

    let result = CartRepository::new(state.pool()).create(&entry).await?;
    Ok(Json(result))
}

/// `DELETE /cart/{id}` - remove a cart entry.
///
/// Deletion is by id only; the caller's identity is not checked against the
/// entry's owner. Known authorization gap, kept pending a requirements call
/// (see DESIGN.md).
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let result = CartRepository::new(state.pool())
        .delete(CartEntryId::new(id))
        .await?;
    Ok(Json(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::models::NewCartEntry;

    #[test]
    fn test_new_cart_entry_wire_names() {
        let entry: NewCartEntry = serde_json::from_str(
            r#"{"userEmail":"diner@example.com","menuId":4,"name":"Tiramisu","price":6.50}"#,
        )
        .unwrap();
        assert_eq!(entry.menu_id.as_i32(), 4);
        assert_eq!(entry.user_email.as_str(), "diner@example.com");
    }
}
