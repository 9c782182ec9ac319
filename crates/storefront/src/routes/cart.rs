//! Cart route handlers.
//!
//! Every mutation responds with the full cart view so the client can
//! re-render without a second round trip; mutations that would have raised
//! a toast in the legacy frontend also carry the corresponding event.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use krishi_jyothi_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{CartEvent, LineItem, NewLineItem};
use crate::services::CartManager;
use crate::state::AppState;

/// Cart display data: the lines plus the derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub item_count: u32,
    pub subtotal: Decimal,
}

impl CartView {
    fn snapshot(cart: &CartManager) -> Self {
        Self {
            items: cart.lines(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Cart view plus the user-facing event a mutation produced.
#[derive(Debug, Serialize)]
pub struct CartMutationResponse {
    #[serde(flatten)]
    pub cart: CartView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<CartEvent>,
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub item: NewLineItem,
    pub quantity: Option<u32>,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove-item request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequest {
    pub product_id: ProductId,
}

/// Simulated checkout outcome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub item_count: u32,
    pub total: Decimal,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::snapshot(state.cart()))
}

/// Add an item, merging into an existing line for the same product.
///
/// The missing-quantity default of 1 matches the legacy add-to-cart call.
#[instrument(skip(state, request))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddRequest>,
) -> Result<Json<CartMutationResponse>> {
    let quantity = request.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("quantity must be positive".to_string()));
    }

    let event = state.cart().add_item(request.item, quantity);
    Ok(Json(CartMutationResponse {
        cart: CartView::snapshot(state.cart()),
        event: Some(event),
    }))
}

/// Set a line's quantity; zero removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Json<CartMutationResponse> {
    let event = state
        .cart()
        .update_quantity(request.product_id, request.quantity);

    Json(CartMutationResponse {
        cart: CartView::snapshot(state.cart()),
        event,
    })
}

/// Remove a line. Removing an absent product is a silent no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> Json<CartMutationResponse> {
    let event = state.cart().remove_item(request.product_id);

    Json(CartMutationResponse {
        cart: CartView::snapshot(state.cart()),
        event,
    })
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartMutationResponse> {
    let event = state.cart().clear();

    Json(CartMutationResponse {
        cart: CartView::snapshot(state.cart()),
        event: Some(event),
    })
}

/// Simulated checkout: waits out the configured latency, then empties the
/// cart and reports what was "ordered". There is no payment backend.
///
/// Requires a logged-in identity; browsing and building a cart do not.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutResponse>> {
    if state.session().current().is_none() {
        return Err(AppError::Unauthorized(
            "you need to be logged in to checkout".to_string(),
        ));
    }

    let cart = state.cart();
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    tokio::time::sleep(state.config().simulated_latency).await;

    let item_count = cart.item_count();
    let total = cart.subtotal();
    cart.clear();
    tracing::info!(item_count, %total, "Checkout completed");

    Ok(Json(CheckoutResponse {
        success: true,
        item_count,
        total,
    }))
}
