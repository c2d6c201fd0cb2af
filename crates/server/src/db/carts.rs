//! Cart repository for database operations.
//!
//! Reads are scoped by owner email. Deletion by id is deliberately not
//! ownership-checked; see DESIGN.md for why that behavior is preserved.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use bistro_core::{CartEntryId, DeleteResult, Email, InsertResult, MenuItemId};

use super::RepositoryError;
use crate::models::{CartEntry, NewCartEntry};

/// Internal row type for `PostgreSQL` cart queries.
#[derive(Debug, sqlx::FromRow)]
struct CartEntryRow {
    id: i32,
    user_email: String,
    menu_id: i32,
    name: String,
    price: Decimal,
    created_at: DateTime<Utc>,
}

impl TryFrom<CartEntryRow> for CartEntry {
    type Error = RepositoryError;

    fn try_from(row: CartEntryRow) -> Result<Self, Self::Error> {
        let user_email = Email::parse(&row.user_email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: CartEntryId::new(row.id),
            user_email,
            menu_id: MenuItemId::new(row.menu_id),
            name: row.name,
            price: row.price,
            created_at: row.created_at,
        })
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's pending cart entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_by_owner(&self, email: &str) -> Result<Vec<CartEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartEntryRow>(
            r"
            SELECT id, user_email, menu_id, name, price, created_at
            FROM cart_entries
            WHERE user_email = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Add a cart entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, entry: &NewCartEntry) -> Result<InsertResult, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO cart_entries (user_email, menu_id, name, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(entry.user_email.as_str())
        .bind(entry.menu_id.as_i32())
        .bind(&entry.name)
        .bind(entry.price)
        .fetch_one(self.pool)
        .await?;

        Ok(InsertResult::inserted(id))
    }

    /// Delete a cart entry by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CartEntryId) -> Result<DeleteResult, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_entries
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        Ok(DeleteResult::deleted(result.rows_affected()))
    }
}
