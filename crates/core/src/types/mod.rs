//! Core types for Bistro.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod ack;
pub mod email;
pub mod id;
pub mod role;

pub use ack::{DeleteResult, InsertResult, UpdateResult};
pub use email::{Email, EmailError};
pub use id::*;
pub use role::{Role, RoleParseError};
