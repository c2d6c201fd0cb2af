//! Payment ledger repository and the aggregation queries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use bistro_core::{CartEntryId, DeleteResult, Email, InsertResult, MenuItemId, PaymentId};

use super::RepositoryError;
use crate::models::{NewPayment, Payment};

/// Internal row type for `PostgreSQL` payment queries.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i32,
    email: String,
    price: Decimal,
    transaction_id: String,
    cart_ids: Vec<i32>,
    menu_ids: Vec<i32>,
    paid_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = RepositoryError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: PaymentId::new(row.id),
            email,
            price: row.price,
            transaction_id: row.transaction_id,
            cart_ids: row.cart_ids.into_iter().map(CartEntryId::new).collect(),
            menu_ids: row.menu_ids.into_iter().map(MenuItemId::new).collect(),
            paid_at: row.paid_at,
        })
    }
}

/// Per-category order statistics.
///
/// `revenue` is summed from the menu item's price *at query time*, not the
/// price recorded on the payment; the two diverge when the catalog changes
/// after a sale. Documented current behavior.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    /// Menu category name.
    pub category: String,
    /// Count of purchased line items in this category, across all payments.
    pub quantity: i64,
    /// Sum of the current catalog price over those line items.
    pub revenue: Decimal,
}

/// Repository for payment database operations.
pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_by_email(&self, email: &Email) -> Result<Vec<Payment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r"
            SELECT id, email, price, transaction_id, cart_ids, menu_ids, paid_at
            FROM payments
            WHERE email = $1
            ORDER BY paid_at DESC
            ",
        )
        .bind(email.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Record a payment and clear the cart entries it covered.
    ///
    /// The ledger insert and the cart delete run in one transaction, so a
    /// failed delete rolls the payment back instead of leaving the two
    /// stores disagreeing. The delete is by id only, not re-scoped to the
    /// payer's email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either statement fails.
    pub async fn record_with_cart_cleanup(
        &self,
        payment: &NewPayment,
    ) -> Result<(InsertResult, DeleteResult), RepositoryError> {
        let cart_ids: Vec<i32> = payment.cart_ids.iter().map(CartEntryId::as_i32).collect();
        let menu_ids: Vec<i32> = payment.menu_ids.iter().map(MenuItemId::as_i32).collect();

        let mut tx = self.pool.begin().await?;

        let payment_id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO payments (email, price, transaction_id, cart_ids, menu_ids, paid_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(payment.email.as_str())
        .bind(payment.price)
        .bind(&payment.transaction_id)
        .bind(&cart_ids)
        .bind(&menu_ids)
        .bind(payment.paid_at)
        .fetch_one(&mut *tx)
        .await?;

        let deleted = sqlx::query(
            r"
            DELETE FROM cart_entries
            WHERE id = ANY($1)
            ",
        )
        .bind(&cart_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((
            InsertResult::inserted(payment_id),
            DeleteResult::deleted(deleted.rows_affected()),
        ))
    }

    /// Count all payments.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Total revenue: the sum of all recorded payment prices.
    ///
    /// Zero when the ledger is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn revenue(&self) -> Result<Decimal, RepositoryError> {
        let total = sqlx::query_scalar::<_, Option<Decimal>>("SELECT SUM(price) FROM payments")
            .fetch_one(self.pool)
            .await?;

        Ok(total.unwrap_or(Decimal::ZERO))
    }

    /// Per-category order quantity and revenue.
    ///
    /// Expands each payment's purchased menu id list, joins it against the
    /// catalog by id, and groups by category. Output order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn category_stats(&self) -> Result<Vec<CategoryStat>, RepositoryError> {
        let stats = sqlx::query_as::<_, CategoryStat>(
            r"
            SELECT m.category, COUNT(*) AS quantity, SUM(m.price) AS revenue
            FROM payments p
            CROSS JOIN LATERAL UNNEST(p.menu_ids) AS line(menu_id)
            JOIN menu_items m ON m.id = line.menu_id
            GROUP BY m.category
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(stats)
    }
}
