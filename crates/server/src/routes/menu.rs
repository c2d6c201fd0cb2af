//! Catalog route handlers.
//!
//! Reads are public; every mutation sits behind the Admin capability gate.

use axum::{
    Json,
    extract::{Path, State},
};

use bistro_core::{DeleteResult, InsertResult, MenuItemId, UpdateResult};

use crate::db::MenuRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{MenuItem, MenuItemPatch, NewMenuItem};
use crate::state::AppState;

/// `GET /menu` - the full catalog.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>> {
    let items = MenuRepository::new(state.pool()).list_all().await?;
    Ok(Json(items))
}

/// `GET /menu/{id}` - a single item.
///
/// An absent item answers with a JSON `null` success body rather than 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<MenuItem>>> {
    let item = MenuRepository::new(state.pool())
        .get_by_id(MenuItemId::new(id))
        .await?;
    Ok(Json(item))
}

/// `POST /menu` (Admin) - create a catalog item.
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(item): Json<NewMenuItem>,
) -> Result<Json<InsertResult>> {
    if item.price.is_sign_negative() {
        return Err(AppError::BadRequest(
            "price must be non-negative".to_string(),
        ));
    }

    let result = MenuRepository::new(state.pool()).create(&item).await?;
    Ok(Json(result))
}

/// `PATCH /menu/{id}` (Admin) - update a catalog item, upserting when the id
/// matches nothing.
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<UpdateResult>> {
    if patch.price.is_some_and(|price| price.is_sign_negative()) {
        return Err(AppError::BadRequest(
            "price must be non-negative".to_string(),
        ));
    }

    let result = MenuRepository::new(state.pool())
        .upsert(MenuItemId::new(id), &patch)
        .await?;
    Ok(Json(result))
}

/// `DELETE /menu/{id}` (Admin) - remove a catalog item.
pub async fn remove(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let result = MenuRepository::new(state.pool())
        .delete(MenuItemId::new(id))
        .await?;
    Ok(Json(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::models::{MenuItemPatch, NewMenuItem};

    #[test]
    fn test_new_menu_item_deserializes() {
        let item: NewMenuItem = serde_json::from_str(
            r#"{"name":"Tiramisu","category":"Dessert","price":6.50,"image":null,"recipe":"classic"}"#,
        )
        .unwrap();
        assert_eq!(item.category, "Dessert");
    }

    #[test]
    fn test_patch_accepts_partial_fields() {
        let patch: MenuItemPatch = serde_json::from_str(r#"{"price":7.25}"#).unwrap();
        assert!(patch.price.is_some());
        assert!(patch.name.is_none());
        assert!(patch.category.is_none());
    }
}
