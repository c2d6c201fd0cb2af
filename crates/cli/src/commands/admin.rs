//! Admin bootstrap command.
//!
//! Role promotion over HTTP requires an existing admin, so the very first
//! admin has to be granted out of band. This command upserts the account
//! with the Admin role.

use bistro_core::{Email, Role};

use super::CommandError;

/// Grant the Admin role to `email`, creating the account if needed.
///
/// # Errors
///
/// Returns `CommandError` if the email is invalid or the upsert fails.
pub async fn grant(email: &str) -> Result<(), CommandError> {
    let email = Email::parse(email).map_err(|e| CommandError::InvalidInput(e.to_string()))?;

    let pool = super::connect().await?;

    sqlx::query(
        r"
        INSERT INTO users (email, role)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        ",
    )
    .bind(email.as_str())
    .bind(Role::Admin.as_str())
    .execute(&pool)
    .await?;

    tracing::info!(email = %email, "Admin role granted");
    Ok(())
}
