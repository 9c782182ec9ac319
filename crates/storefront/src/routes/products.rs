//! Marketplace product route handlers.
//!
//! Browsing is open; listing, updating, and delisting require a logged-in
//! farmer, and the catalog itself enforces per-product ownership.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use krishi_jyothi_core::{ProductId, UserId};

use crate::error::{AppError, Result};
use crate::models::{Identity, Product, ProductDraft};
use crate::state::AppState;

/// Query parameters for the marketplace listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one farmer's products (dashboard view).
    pub farmer: Option<i32>,
}

/// Resolve the current identity and require the farmer role.
fn require_farmer(state: &AppState) -> Result<Identity> {
    let identity = state
        .session()
        .current()
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))?;
    if !identity.role.is_farmer() {
        return Err(AppError::Forbidden(
            "only farmers can manage products".to_string(),
        ));
    }
    Ok(identity)
}

/// List marketplace products, optionally filtered to one farmer.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let products = match query.farmer {
        Some(id) => state.products().list_by_farmer(UserId::new(id)),
        None => state.products().list(),
    };
    Json(products)
}

/// Look up one product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .products()
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))
}

/// List a new product for the logged-in farmer.
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>> {
    let farmer = require_farmer(&state)?;
    let product = state.products().create(&draft, &farmer)?;
    Ok(Json(product))
}

/// Update one of the logged-in farmer's products.
#[instrument(skip(state, draft))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>> {
    let farmer = require_farmer(&state)?;
    let product = state
        .products()
        .update(ProductId::new(id), &draft, &farmer)?;
    Ok(Json(product))
}

/// Delist one of the logged-in farmer's products.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let farmer = require_farmer(&state)?;
    state.products().delete(ProductId::new(id), &farmer)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
