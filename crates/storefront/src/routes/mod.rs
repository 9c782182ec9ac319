//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Auth
//! POST  /api/auth/login        - Login (boolean outcome)
//! POST  /api/auth/signup       - Signup (boolean outcome)
//! POST  /api/auth/logout       - Logout
//! GET   /api/auth/me           - Current identity
//! PATCH /api/auth/profile      - Merge a profile update
//!
//! # Cart
//! GET  /api/cart               - Cart view (items, itemCount, subtotal)
//! POST /api/cart/add           - Add item (merge-or-insert)
//! POST /api/cart/update        - Update quantity (0 removes)
//! POST /api/cart/remove        - Remove item
//! POST /api/cart/clear         - Empty the cart
//! POST /api/cart/checkout      - Simulated checkout (clears the cart)
//!
//! # Products
//! GET    /api/products         - Marketplace listing
//! GET    /api/products/{id}    - Product detail
//! POST   /api/products         - List a product (farmer only)
//! PUT    /api/products/{id}    - Update a product (owning farmer only)
//! DELETE /api/products/{id}    - Delist a product (owning farmer only)
//!
//! # Misc
//! POST /api/subscribe          - Newsletter subscription (no persistence)
//! GET  /api/weather?location=X - Mock weather payload for a city
//! ```

pub mod auth;
pub mod cart;
pub mod products;
pub mod subscribe;
pub mod weather;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/profile", patch(auth::update_profile))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .nest("/products", product_routes())
        .route("/subscribe", post(subscribe::subscribe))
        .route("/weather", get(weather::lookup));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
