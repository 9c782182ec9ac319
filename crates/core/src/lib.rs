//! Shared domain types for Krishi Jyothi.
//!
//! This crate holds the validated value types used across the workspace:
//! type-safe entity IDs, email addresses, user roles, and prices.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::email::{Email, EmailError};
pub use types::id::{ProductId, UserId};
pub use types::price::Price;
pub use types::role::Role;
