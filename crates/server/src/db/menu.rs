//! Catalog repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use bistro_core::{DeleteResult, InsertResult, MenuItemId, UpdateResult};

use super::RepositoryError;
use crate::models::{MenuItem, MenuItemPatch, NewMenuItem};

/// Internal row type for `PostgreSQL` menu queries.
#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: i32,
    name: String,
    category: String,
    price: Decimal,
    image: Option<String>,
    recipe: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: MenuItemId::new(row.id),
            name: row.name,
            category: row.category,
            price: row.price,
            image: row.image,
            recipe: row.recipe,
            created_at: row.created_at,
        }
    }
}

/// Repository for catalog database operations.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT id, name, category, price, image, recipe, created_at
            FROM menu_items
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a menu item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT id, name, category, price, image, recipe, created_at
            FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, item: &NewMenuItem) -> Result<InsertResult, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO menu_items (name, category, price, image, recipe)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.image)
        .bind(&item.recipe)
        .fetch_one(self.pool)
        .await?;

        Ok(InsertResult::inserted(id))
    }

    /// Update a menu item, inserting it when the id matches nothing (upsert).
    ///
    /// Absent patch fields keep the stored value on update; on insert they
    /// fall back to empty/zero defaults, matching the store's
    /// update-or-insert contract of "the filter's identity plus the given
    /// fields".
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either statement fails.
    pub async fn upsert(
        &self,
        id: MenuItemId,
        patch: &MenuItemPatch,
    ) -> Result<UpdateResult, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r"
            UPDATE menu_items
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                image = COALESCE($5, image),
                recipe = COALESCE($6, recipe)
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(patch.price)
        .bind(&patch.image)
        .bind(&patch.recipe)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() > 0 {
            tx.commit().await?;
            return Ok(UpdateResult::matched(updated.rows_affected()));
        }

        let inserted_id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO menu_items (id, name, category, price, image, recipe)
            VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, 0), $5, $6)
            RETURNING id
            ",
        )
        .bind(id.as_i32())
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(patch.price)
        .bind(&patch.image)
        .bind(&patch.recipe)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(UpdateResult::upserted(inserted_id))
    }

    /// Delete a menu item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: MenuItemId) -> Result<DeleteResult, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        Ok(DeleteResult::deleted(result.rows_affected()))
    }

    /// Count all menu items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
