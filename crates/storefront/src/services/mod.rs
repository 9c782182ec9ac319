//! Application services.
//!
//! The two state managers (session, cart) plus the fixed credential catalog
//! and the marketplace product catalog they lean on.

pub mod cart;
pub mod catalog;
pub mod products;
pub mod session;

pub use cart::CartManager;
pub use catalog::CredentialCatalog;
pub use products::ProductCatalog;
pub use session::{SessionManager, SessionState};
