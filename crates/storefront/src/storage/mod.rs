//! Key-value persistence port.
//!
//! Cart, wishlist, and order state persist as JSON blobs under fixed string
//! keys. The [`KeyValueStore`] trait is the seam: store logic never touches
//! the filesystem directly, so it runs unchanged against the in-memory
//! backend in tests and the file backend in the CLI.
//!
//! There is no schema versioning. A blob whose shape no longer deserializes
//! is treated as absent and the owning store reinitializes empty.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (file backend only).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot represent.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-keyed blob store.
///
/// Implementations must apply writes in call order; callers rely on
/// last-write-wins semantics with a single writer.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to write, or
    /// [`StorageError::InvalidKey`] if the key is not representable.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the blob under `key` if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Fixed keys used by the stores. Independent blobs, never merged.
pub mod keys {
    /// Cart line list.
    pub const CART: &str = "cart";
    /// Wishlist product list.
    pub const WISHLIST: &str = "wishlist";
    /// Placed order list.
    pub const ORDERS: &str = "orders";
}
