//! Cart manager.
//!
//! Maintains the shopping cart for this session and exposes the derived
//! totals that affect a purchase. The full line array is mirrored to the
//! key-value store on every mutation and loaded once at construction.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use krishi_jyothi_core::ProductId;

use crate::models::{CartEvent, LineItem, NewLineItem};
use crate::store::{KeyValueStore, keys};

/// Manages the cart line items for the current session.
pub struct CartManager {
    store: Arc<dyn KeyValueStore>,
    lines: Mutex<Vec<LineItem>>,
}

impl CartManager {
    /// Create a cart manager, restoring any persisted lines.
    ///
    /// Malformed stored data is logged and discarded, leaving the cart
    /// empty rather than failing startup.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let lines = match store.get(keys::CART_LINES) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted cart");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted cart");
                Vec::new()
            }
        };

        Self {
            store,
            lines: Mutex::new(lines),
        }
    }

    fn lines_guard(&self) -> MutexGuard<'_, Vec<LineItem>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into the existing line for the same product id if there is
    /// one, otherwise inserts a new line at the end. `quantity` is assumed
    /// positive; the cart never validates it.
    pub fn add_item(&self, item: NewLineItem, quantity: u32) -> CartEvent {
        let mut lines = self.lines_guard();

        let event = if let Some(line) = lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity += quantity;
            CartEvent::QuantityUpdated {
                name: item.name.clone(),
            }
        } else {
            let name = item.name.clone();
            lines.push(item.into_line(quantity));
            CartEvent::Added { name }
        };

        self.persist(&lines);
        event
    }

    /// Remove the line for a product.
    ///
    /// Missing products are a no-op and produce no event, matching the
    /// legacy frontend's notification behavior.
    pub fn remove_item(&self, id: ProductId) -> Option<CartEvent> {
        let mut lines = self.lines_guard();

        let index = lines.iter().position(|line| line.id == id)?;
        let removed = lines.remove(index);
        self.persist(&lines);

        Some(CartEvent::Removed { name: removed.name })
    }

    /// Set a line's quantity in place.
    ///
    /// A target of zero removes the line instead of leaving a zero-quantity
    /// entry. A plain quantity change produces no event.
    pub fn update_quantity(&self, id: ProductId, quantity: u32) -> Option<CartEvent> {
        if quantity == 0 {
            return self.remove_item(id);
        }

        let mut lines = self.lines_guard();
        if let Some(line) = lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
            self.persist(&lines);
        }
        None
    }

    /// Empty the cart unconditionally.
    pub fn clear(&self) -> CartEvent {
        let mut lines = self.lines_guard();
        lines.clear();
        self.persist(&lines);
        CartEvent::Cleared
    }

    /// A snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<LineItem> {
        self.lines_guard().clone()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines_guard().is_empty()
    }

    /// Sum of all quantities. Recomputed on every call, never cached.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines_guard().iter().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity over all lines. Recomputed on every
    /// call, never cached.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines_guard()
            .iter()
            .map(|line| line.price.line_total(line.quantity))
            .sum()
    }

    /// Mirror the full line array to the store.
    ///
    /// Storage failures are logged and swallowed; the in-memory cart stays
    /// authoritative for the rest of the session.
    fn persist(&self, lines: &[LineItem]) {
        match serde_json::to_string(lines) {
            Ok(raw) => {
                if let Err(e) = self.store.set(keys::CART_LINES, &raw) {
                    tracing::error!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
    }
}
