//! Cart line-item types.
//!
//! Serialized with the legacy frontend's `localStorage` field names so a
//! persisted cart from the old app loads unchanged.

use serde::{Deserialize, Serialize};

use krishi_jyothi_core::{Price, ProductId, UserId};

/// One product-and-quantity entry in the cart.
///
/// Invariant: `quantity >= 1` while the line exists; the cart manager removes
/// the line instead of letting the quantity reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Price,
    pub quantity: u32,
    /// Unit label, e.g. "kg" or "dozen".
    pub unit: String,
    pub image: String,
    pub farmer_id: UserId,
    pub farmer_name: String,
    pub organic: bool,
}

/// A line item as submitted by the caller, without a quantity.
///
/// Mirrors the legacy add-to-cart payload; the quantity travels separately
/// so adds can merge into an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub unit: String,
    pub image: String,
    pub farmer_id: UserId,
    pub farmer_name: String,
    pub organic: bool,
}

impl NewLineItem {
    /// Attach a quantity, producing a full line item.
    #[must_use]
    pub fn into_line(self, quantity: u32) -> LineItem {
        LineItem {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity,
            unit: self.unit,
            image: self.image,
            farmer_id: self.farmer_id,
            farmer_name: self.farmer_name,
            organic: self.organic,
        }
    }
}

/// User-facing outcome of a cart mutation.
///
/// The legacy frontend raised toasts for these; here they are values the caller
/// can render. `update_quantity` deliberately produces no event on a plain
/// quantity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line was inserted.
    Added { name: String },
    /// An existing line's quantity was incremented by an add.
    QuantityUpdated { name: String },
    /// A line was removed.
    Removed { name: String },
    /// The whole cart was emptied.
    Cleared,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_into_line_keeps_fields() {
        let item = NewLineItem {
            id: ProductId::new(1),
            name: "Tomatoes".to_string(),
            price: Price::from_rupees(60),
            unit: "kg".to_string(),
            image: "/placeholder.svg".to_string(),
            farmer_id: UserId::new(1),
            farmer_name: "Rajesh Patel".to_string(),
            organic: true,
        };

        let line = item.into_line(2);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Tomatoes");
        assert!(line.organic);
    }

    #[test]
    fn test_line_item_wire_shape() {
        let line = NewLineItem {
            id: ProductId::new(3),
            name: "Spinach".to_string(),
            price: Price::from_rupees(40),
            unit: "bunch".to_string(),
            image: "/placeholder.svg".to_string(),
            farmer_id: UserId::new(1),
            farmer_name: "Rajesh Patel".to_string(),
            organic: true,
        }
        .into_line(1);

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["farmerId"], 1);
        assert_eq!(json["farmerName"], "Rajesh Patel");
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_cart_event_serialization() {
        let json = serde_json::to_value(CartEvent::Added {
            name: "Tomatoes".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "added");
        assert_eq!(json["name"], "Tomatoes");

        let json = serde_json::to_value(CartEvent::Cleared).unwrap();
        assert_eq!(json["kind"], "cleared");
    }
}
