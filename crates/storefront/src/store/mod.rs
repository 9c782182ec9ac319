//! Key-value persistence port.
//!
//! The legacy frontend mirrored the session identity and the cart to browser
//! `localStorage`. This module keeps that contract as a small string-keyed,
//! JSON-valued port so the managers can be wired to an on-disk store in the
//! binary and an in-memory fake in tests.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-keyed store of JSON-serialized values.
///
/// Implementations must behave like `localStorage`: last write wins, reads
/// return exactly what was last written, removing a missing key is a no-op.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Missing keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage keys for persisted application state.
///
/// These are the exact keys the legacy frontend used in `localStorage`,
/// kept so an exported record remains recognizable.
pub mod keys {
    /// Key for the persisted session identity record.
    pub const SESSION_IDENTITY: &str = "krishijyothi_user";

    /// Key for the persisted cart line-item array.
    pub const CART_LINES: &str = "krishijyothi_cart";
}
