//! Domain types for the storefront.
//!
//! These are validated domain objects, separate from the per-route
//! request/response types that live next to their handlers.

pub mod cart;
pub mod identity;
pub mod product;

pub use cart::{CartEvent, LineItem, NewLineItem};
pub use identity::{Identity, ProfileUpdate, SignupDraft};
pub use product::{Product, ProductDraft};

use krishi_jyothi_core::EmailError;
use thiserror::Error;

/// Errors from validating a submitted form record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{field} is required")]
    Missing {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The email field was present but not a valid address.
    #[error("please enter a valid email address")]
    Email(#[from] EmailError),

    /// A price field was negative.
    #[error("price cannot be negative")]
    NegativePrice,
}
