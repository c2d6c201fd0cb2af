//! Integration tests for Bistro.
//!
//! These tests exercise the server library surface - the guard, the token
//! service, the checkout conversions, and the wire contracts - without a
//! live database or gateway. Database-backed behavior (repositories,
//! the transactional payment commit) is covered by the SQL itself plus a
//! deployed environment; see the `server` crate's `migrations/`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-integration-tests
//! ```

/// The signing secret used by the test token services.
#[must_use]
pub fn test_secret() -> secrecy::SecretString {
    secrecy::SecretString::from("integration-test-signing-key-0123456789")
}
