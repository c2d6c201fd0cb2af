//! HTTP middleware and request guards.

pub mod auth;

pub use auth::{Authenticated, RequireAdmin, bearer_token, ensure_self};
