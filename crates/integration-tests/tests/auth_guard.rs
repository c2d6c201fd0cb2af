//! Integration tests for the authentication guard contract.
//!
//! These verify the testable properties of the gate: tokenless requests are
//! rejected 401 with the missing-token message, bad tokens 401 with a
//! distinct message, and identity/role mismatches are 403 - all without a
//! handler ever running.

use axum::body::to_bytes;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
use axum::response::IntoResponse;
use secrecy::SecretString;

use bistro_core::Email;
use bistro_server::error::AppError;
use bistro_server::middleware::{bearer_token, ensure_self};
use bistro_server::services::token::{AuthError, Claims, TokenService};

use bistro_integration_tests::test_secret;

async fn response_message(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON body");
    let message = value
        .get("message")
        .and_then(|m| m.as_str())
        .expect("message field")
        .to_string();
    (status, message)
}

// =============================================================================
// Authentication (401)
// =============================================================================

#[tokio::test]
async fn missing_token_is_401_with_missing_message() {
    let headers = HeaderMap::new();
    let err = bearer_token(&headers).expect_err("no header should fail");

    let (status, message) = response_message(AppError::Auth(err)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(message.contains("without token"), "got: {message}");
}

#[tokio::test]
async fn invalid_token_is_401_with_distinct_message() {
    let tokens = TokenService::new(&test_secret());
    let err = tokens.verify("garbage").expect_err("garbage should fail");

    let (status, message) = response_message(AppError::Auth(err)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(message.contains("wrong token"), "got: {message}");

    let (_, missing_message) = response_message(AppError::Auth(AuthError::Missing)).await;
    assert_ne!(message, missing_message);
}

#[test]
fn valid_bearer_header_verifies_end_to_end() {
    let tokens = TokenService::new(&test_secret());
    let email = Email::parse("diner@example.com").expect("valid email");
    let token = tokens.issue(&email).expect("issue succeeds");

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("header value"),
    );

    let extracted = bearer_token(&headers).expect("bearer extracted");
    let claims = tokens.verify(extracted).expect("verifies");
    assert_eq!(claims.email, "diner@example.com");
}

#[test]
fn token_signed_with_another_secret_is_rejected() {
    let theirs = TokenService::new(&SecretString::from("some-other-key-material-abcdef0123"));
    let email = Email::parse("diner@example.com").expect("valid email");
    let token = theirs.issue(&email).expect("issue succeeds");

    let ours = TokenService::new(&test_secret());
    assert_eq!(
        ours.verify(&token).expect_err("foreign signature"),
        AuthError::Invalid
    );
}

#[test]
fn expired_token_is_rejected() {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use secrecy::ExposeSecret;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "diner@example.com".to_string(),
        email: "diner@example.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let key = EncodingKey::from_secret(test_secret().expose_secret().as_bytes());
    let token = encode(&Header::default(), &claims, &key).expect("encode succeeds");

    let tokens = TokenService::new(&test_secret());
    assert_eq!(
        tokens.verify(&token).expect_err("expired token"),
        AuthError::Invalid
    );
}

// =============================================================================
// Identity scoping (403)
// =============================================================================

#[tokio::test]
async fn reading_another_users_data_is_403() {
    let claims = Claims {
        sub: "diner@example.com".to_string(),
        email: "diner@example.com".to_string(),
        iat: 0,
        exp: 0,
    };

    let err = ensure_self(&claims, "other@example.com").expect_err("mismatch should fail");
    let (status, _) = response_message(err).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test]
fn reading_own_data_passes_the_identity_gate() {
    let claims = Claims {
        sub: "diner@example.com".to_string(),
        email: "diner@example.com".to_string(),
        iat: 0,
        exp: 0,
    };

    assert!(ensure_self(&claims, "diner@example.com").is_ok());
}
