//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bistro_core::{Email, Role, UserId};

/// An account in the user directory.
///
/// Created on first login (insert-if-absent); the email is immutable after
/// creation and the role is mutated only by the role-change operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// Optional display name from the signup payload.
    pub name: Option<String>,
    /// Capability level.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
