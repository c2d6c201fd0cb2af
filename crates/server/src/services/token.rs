//! Short-lived identity tokens.
//!
//! `issue` signs a token embedding the subject's email with a fixed one-hour
//! validity window and a server-held secret; `verify` checks the signature
//! and expiry. There is no refresh mechanism - re-issuance is the client's
//! responsibility.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bistro_core::Email;

/// How long an issued token stays valid.
const TOKEN_VALIDITY_SECS: i64 = 60 * 60;

/// Authentication failures, each with its own client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No bearer token was supplied.
    #[error("without token: you have no access")]
    Missing,
    /// The token was malformed, expired, or carried a bad signature.
    #[error("wrong token: you have no access")]
    Invalid,
}

/// Identity attributes embedded in a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email).
    pub sub: String,
    /// The user's email address.
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies identity tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a signed token for `email`, valid for one hour.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if signing fails.
    pub fn issue(&self, email: &Email) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_VALIDITY_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Invalid` for any malformed, expired, or
    /// wrongly-signed token.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&SecretString::from("unit-test-signing-key-0123456789ab"))
    }

    fn email() -> Email {
        Email::parse("diner@example.com").unwrap()
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue(&email()).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "diner@example.com");
        assert_eq!(claims.sub, "diner@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_VALIDITY_SECS);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            service().verify("not-a-token").unwrap_err(),
            AuthError::Invalid
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = service().issue(&email()).unwrap();
        let other = TokenService::new(&SecretString::from("a-different-signing-key-987654321"));

        assert_eq!(other.verify(&token).unwrap_err(), AuthError::Invalid);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let tokens = service();
        let now = chrono::Utc::now().timestamp();
        // Well past the default validation leeway.
        let claims = Claims {
            sub: "diner@example.com".to_string(),
            email: "diner@example.com".to_string(),
            iat: now - 2 * TOKEN_VALIDITY_SECS,
            exp: now - TOKEN_VALIDITY_SECS,
        };
        let token = encode(&Header::default(), &claims, &tokens.encoding).unwrap();

        assert_eq!(tokens.verify(&token).unwrap_err(), AuthError::Invalid);
    }
}
