//! Product types for the marketplace and the farmer dashboard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use krishi_jyothi_core::{Price, ProductId, UserId};

use super::ValidationError;

/// A purchasable product listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Category label, e.g. "Vegetables" or "Fruits".
    pub category: String,
    /// Unit price.
    pub price: Price,
    /// Unit label, e.g. "kg" or "dozen".
    pub unit: String,
    /// Units currently in stock.
    pub stock: u32,
    pub organic: bool,
    pub image: String,
    /// The farmer who listed this product.
    pub farmer_id: UserId,
    pub farmer_name: String,
}

/// Typed record for the add/edit product form.
///
/// Field set matches the dashboard form: name, description, category,
/// price, unit, stock, organic, image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub unit: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductDraft {
    /// Validate the draft, returning the parsed price on success.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a required field is blank or the price
    /// is negative.
    pub fn validate(&self) -> Result<Price, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Missing { field: "name" });
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::Missing { field: "category" });
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::Missing { field: "unit" });
        }
        Price::new(self.price).ok_or(ValidationError::NegativePrice)
    }
}
