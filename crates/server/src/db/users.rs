//! User repository for database operations.
//!
//! Account creation is an insert-if-absent keyed on email: the first login
//! creates the row, every later call acknowledges with `insertedId: null`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use bistro_core::{DeleteResult, Email, InsertResult, Role, UpdateResult, UserId};

use super::RepositoryError;
use crate::models::User;

/// Internal row type for `PostgreSQL` user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    name: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let role: Role = row.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            email,
            name: row.name,
            role,
            created_at: row.created_at,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, name, role, created_at
            FROM users
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, name, role, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a user unless one with the same email already exists.
    ///
    /// New users start as `Member`. Returns `InsertResult::skipped()` when the
    /// email is already taken, making first-login registration idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create_if_absent(
        &self,
        email: &Email,
        name: Option<&str>,
    ) -> Result<InsertResult, RepositoryError> {
        let inserted_id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO users (email, name, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id
            ",
        )
        .bind(email.as_str())
        .bind(name)
        .bind(Role::Member.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(inserted_id.map_or_else(InsertResult::skipped, InsertResult::inserted))
    }

    /// Promote a user to `Admin`.
    ///
    /// The only exposed role transition. Acknowledges with a matched count of
    /// zero when the id refers to no user; nothing is inserted in that case.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn promote_to_admin(&self, id: UserId) -> Result<UpdateResult, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET role = $1
            WHERE id = $2
            ",
        )
        .bind(Role::Admin.as_str())
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        Ok(UpdateResult::matched(result.rows_affected()))
    }

    /// Delete a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: UserId) -> Result<DeleteResult, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        Ok(DeleteResult::deleted(result.rows_affected()))
    }

    /// Count all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
