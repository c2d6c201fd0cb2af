//! Token issuance route.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use bistro_core::Email;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Token request payload. Extra profile fields from the login flow are
/// accepted and ignored; only the email ends up in the claims.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: Email,
}

/// Issued token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /jwt` - issue a one-hour identity token for the given email.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    tracing::debug!(email = %req.email, "issuing token");

    let token = state
        .tokens()
        .issue(&req.email)
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_extra_profile_fields() {
        let req: TokenRequest = serde_json::from_str(
            r#"{"email":"diner@example.com","name":"Diner","photo":"https://x/y.png"}"#,
        )
        .unwrap();
        assert_eq!(req.email.as_str(), "diner@example.com");
    }

    #[test]
    fn test_request_rejects_invalid_email() {
        assert!(serde_json::from_str::<TokenRequest>(r#"{"email":"not-an-email"}"#).is_err());
    }
}
