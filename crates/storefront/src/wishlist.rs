//! Wishlist store.
//!
//! A set of saved products keyed by product id, with no quantities. Same
//! persistence pattern as the cart, under its own independent storage key:
//! every mutation writes the full list, construction falls back to empty
//! on missing or malformed data.

use std::sync::Arc;

use tracing::{debug, error, warn};

use carewell_core::ProductId;

use crate::catalog::Product;
use crate::storage::{KeyValueStore, keys};

/// Mutable wishlist state over an injected persistence port.
pub struct WishlistStore {
    entries: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
}

impl WishlistStore {
    /// Load the wishlist from storage, starting empty when the blob is
    /// missing or no longer deserializes.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let entries = load_entries(storage.as_ref());
        Self { entries, storage }
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    /// Whether a product is saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|p| &p.id == id)
    }

    /// Save a product. Idempotent: saving an already-saved product is a no-op.
    pub fn add(&mut self, product: Product) {
        if self.contains(&product.id) {
            return;
        }
        self.entries.push(product);
        self.persist();
    }

    /// Remove a saved product. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.entries.len();
        self.entries.retain(|p| &p.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(blob) => {
                if let Err(e) = self.storage.set(keys::WISHLIST, &blob) {
                    error!(error = %e, "failed to persist wishlist");
                }
            }
            Err(e) => error!(error = %e, "failed to serialize wishlist"),
        }
    }
}

fn load_entries(storage: &dyn KeyValueStore) -> Vec<Product> {
    let blob = match storage.get(keys::WISHLIST) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "failed to read persisted wishlist, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Product>>(&blob) {
        Ok(entries) => {
            debug!(entries = entries.len(), "loaded persisted wishlist");
            entries
        }
        Err(e) => {
            warn!(error = %e, "malformed persisted wishlist, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;
    use crate::storage::MemoryStore;

    fn empty_wishlist() -> WishlistStore {
        WishlistStore::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = empty_wishlist();
        wishlist.add(product("1", 100, 0));
        wishlist.add(product("1", 100, 0));

        assert_eq!(wishlist.total_items(), 1);
        assert!(wishlist.contains(&ProductId::new("1")));
    }

    #[test]
    fn test_remove_and_unknown_id() {
        let mut wishlist = empty_wishlist();
        wishlist.add(product("1", 100, 0));
        wishlist.add(product("2", 50, 0));

        wishlist.remove(&ProductId::new("1"));
        assert!(!wishlist.contains(&ProductId::new("1")));
        assert_eq!(wishlist.total_items(), 1);

        // Unknown id: no-op, no error.
        wishlist.remove(&ProductId::new("99"));
        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_persists_independently_of_cart() {
        let storage = Arc::new(MemoryStore::new());
        {
            let mut wishlist = WishlistStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
            wishlist.add(product("1", 100, 0));
        }

        // Cart key untouched, wishlist key populated.
        assert!(storage.get(keys::CART).unwrap().is_none());
        let reloaded = WishlistStore::load(storage);
        assert_eq!(reloaded.total_items(), 1);
    }

    #[test]
    fn test_malformed_blob_falls_back_to_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::WISHLIST, "42").unwrap();

        let wishlist = WishlistStore::load(storage);
        assert_eq!(wishlist.total_items(), 0);
    }
}
