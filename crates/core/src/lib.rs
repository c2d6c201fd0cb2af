//! Bistro Core - Shared types library.
//!
//! This crate provides common types used across all Bistro components:
//! - `server` - The restaurant ordering API
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, validated emails, the role/capability enum, and
//!   driver-level write acknowledgments

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
