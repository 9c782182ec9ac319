//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{CartManager, CredentialCatalog, ProductCatalog, SessionManager};
use crate::store::KeyValueStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The managers are owned here, constructed
/// explicitly from a store and config, so tests can build fresh instances
/// with an in-memory store and zero latency.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    session: SessionManager,
    cart: CartManager,
    products: ProductCatalog,
}

impl AppState {
    /// Create application state over the given key-value store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let session = SessionManager::new(
            Arc::clone(&store),
            CredentialCatalog::with_demo_users(),
            config.simulated_latency,
        );
        let cart = CartManager::new(store);
        let products = ProductCatalog::with_demo_products();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                session,
                cart,
                products,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the session manager.
    #[must_use]
    pub fn session(&self) -> &SessionManager {
        &self.inner.session
    }

    /// Get a reference to the cart manager.
    #[must_use]
    pub fn cart(&self) -> &CartManager {
        &self.inner.cart
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn products(&self) -> &ProductCatalog {
        &self.inner.products
    }
}
