//! User directory route handlers.
//!
//! Self-registration is open (and idempotent); listing accounts, role
//! promotion, and account deletion are Admin-gated. The admin-flag lookup is
//! identity-scoped: callers may only ask about themselves.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use bistro_core::{DeleteResult, Email, UpdateResult, UserId};

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::{Authenticated, RequireAdmin, ensure_self};
use crate::models::User;
use crate::state::AppState;

/// `GET /users` (Admin) - all accounts.
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users))
}

/// Admin-flag response.
#[derive(Debug, Serialize)]
pub struct AdminFlag {
    pub admin: bool,
}

/// `GET /user/admin/{email}` (authenticated, self-only) - whether the account
/// holds the Admin capability. Unknown accounts answer `false`.
pub async fn admin_flag(
    Authenticated(claims): Authenticated,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminFlag>> {
    ensure_self(&claims, &email)?;

    let email = Email::parse(&email).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let user = UserRepository::new(state.pool())
        .get_by_email(&email)
        .await?;

    let admin = user.is_some_and(|u| u.role == bistro_core::Role::Admin);
    Ok(Json(AdminFlag { admin }))
}

/// Registration payload. The login flow posts the whole profile; only the
/// name is kept, the email comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
}

/// Registration response: the insert acknowledgment, plus a note when the
/// account already existed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub inserted_id: Option<i32>,
}

/// `PUT /user/{email}` - idempotent create-if-absent keyed on email.
///
/// The second call with the same email acknowledges with
/// `insertedId: null` and leaves the existing account untouched.
pub async fn register(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    let email = Email::parse(&email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = UserRepository::new(state.pool())
        .create_if_absent(&email, body.name.as_deref())
        .await?;

    let response = match result.inserted_id {
        Some(id) => RegisterResponse {
            message: None,
            inserted_id: Some(id),
        },
        None => RegisterResponse {
            message: Some("user already exists"),
            inserted_id: None,
        },
    };

    Ok(Json(response))
}

/// `PATCH /user/{id}` (Admin) - promote the account to Admin.
///
/// Acknowledges with a zero matched count when the id refers to no account.
pub async fn promote(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UpdateResult>> {
    let result = UserRepository::new(state.pool())
        .promote_to_admin(UserId::new(id))
        .await?;
    Ok(Json(result))
}

/// `DELETE /user/{id}` (Admin) - delete the account.
pub async fn remove(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let result = UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;
    Ok(Json(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_for_existing_user() {
        let response = RegisterResponse {
            message: Some("user already exists"),
            inserted_id: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"message":"user already exists","insertedId":null}"#
        );
    }

    #[test]
    fn test_register_response_for_new_user() {
        let response = RegisterResponse {
            message: None,
            inserted_id: Some(12),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"insertedId":12}"#);
    }

    #[test]
    fn test_register_request_ignores_extra_fields() {
        let body: RegisterRequest =
            serde_json::from_str(r#"{"email":"x@y.z","name":"Diner","photo":"p"}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("Diner"));
    }
}
