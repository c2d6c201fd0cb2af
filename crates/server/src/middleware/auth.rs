//! Authentication and authorization extractors.
//!
//! The guard runs in two stages. [`Authenticated`] verifies the bearer token
//! and carries the decoded claims; [`RequireAdmin`] additionally resolves the
//! caller's role from the user directory and demands the `Admin` capability
//! through the single [`Role::permits`] gate. The rejection happens before
//! the handler body runs, so no mutation executes on a denied request.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use bistro_core::{Email, Role};

use crate::db::UserRepository;
use crate::error::AppError;
use crate::services::token::{AuthError, Claims};
use crate::state::AppState;

/// Pull the bearer token out of the `Authorization` header.
///
/// # Errors
///
/// Returns `AuthError::Missing` when the header is absent and
/// `AuthError::Invalid` when it does not carry a bearer token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::Missing)?;
    let value = header.to_str().map_err(|_| AuthError::Invalid)?;
    value.strip_prefix("Bearer ").ok_or(AuthError::Invalid)
}

/// Require that the path or query email matches the authenticated identity.
///
/// Identity scoping is independent of role: even an authenticated caller may
/// only read their own private data.
///
/// # Errors
///
/// Returns `AppError::Forbidden` on a mismatch.
pub fn ensure_self(claims: &Claims, email: &str) -> Result<(), AppError> {
    if claims.email == email {
        Ok(())
    } else {
        Err(AppError::Forbidden("access forbidden".to_string()))
    }
}

/// Extractor that requires a valid bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Authenticated(claims): Authenticated) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct Authenticated(pub Claims);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.tokens().verify(token)?;
        Ok(Self(claims))
    }
}

/// Extractor that requires a valid bearer token belonging to an Admin.
///
/// The role is looked up per request - no caching - so a role change takes
/// effect on the caller's next request. An authenticated caller whose
/// account is missing or not Admin gets 403.
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.tokens().verify(token)?;

        let email = Email::parse(&claims.email).map_err(|_| AuthError::Invalid)?;
        let user = UserRepository::new(state.pool())
            .get_by_email(&email)
            .await?;

        let role = user.map(|u| u.role).unwrap_or_default();
        if !role.permits(Role::Admin) {
            return Err(AppError::Forbidden("forbidden access".to_string()));
        }

        Ok(Self(claims))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn claims(email: &str) -> Claims {
        Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers).unwrap_err(), AuthError::Missing);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers).unwrap_err(), AuthError::Invalid);
    }

    #[test]
    fn test_bearer_token_extracts_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok-1"));
        assert_eq!(bearer_token(&headers).unwrap(), "tok-1");
    }

    #[test]
    fn test_ensure_self_accepts_own_email() {
        assert!(ensure_self(&claims("a@example.com"), "a@example.com").is_ok());
    }

    #[test]
    fn test_ensure_self_rejects_other_email() {
        let err = ensure_self(&claims("a@example.com"), "b@example.com").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
