//! Shopping cart store.
//!
//! The cart holds at most one line per product; adding an existing product
//! merges quantities. Every mutation persists the full line list to the
//! key-value port under [`crate::storage::keys::CART`], and construction
//! loads from that key, falling back to an empty cart on missing or
//! malformed data. Nothing here is fatal: persistence failures are logged
//! and the in-memory state stays authoritative for the session.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use carewell_core::ProductId;

use crate::catalog::Product;
use crate::storage::{KeyValueStore, keys};

/// A (product, quantity) pair in the cart.
///
/// The product is snapshotted at add time, so a later catalog change does
/// not silently reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1; a quantity reaching 0 removes the line instead.
    pub quantity: u32,
}

impl CartLine {
    /// Discounted unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.discounted_price() * Decimal::from(self.quantity)
    }
}

/// Mutable cart state over an injected persistence port.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Load the cart from storage, starting empty when the blob is missing
    /// or no longer deserializes.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let lines = load_lines(storage.as_ref());
        Self { lines, storage }
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a product is already in the cart.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.lines.iter().any(|line| &line.product.id == id)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of discounted line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into an existing line for the same product id; otherwise
    /// appends a new line. Adding zero units is a no-op.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { product, quantity });
        }
        self.persist();
    }

    /// Remove the line for a product. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product.id != id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Set a line's quantity to exactly `quantity` (not additive).
    ///
    /// A quantity of 0 removes the line; an unknown id is a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| &line.product.id == id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.lines) {
            Ok(blob) => {
                if let Err(e) = self.storage.set(keys::CART, &blob) {
                    error!(error = %e, "failed to persist cart");
                }
            }
            Err(e) => error!(error = %e, "failed to serialize cart"),
        }
    }
}

fn load_lines(storage: &dyn KeyValueStore) -> Vec<CartLine> {
    let blob = match storage.get(keys::CART) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&blob) {
        Ok(lines) => {
            let lines: Vec<CartLine> = lines;
            debug!(lines = lines.len(), "loaded persisted cart");
            lines
        }
        Err(e) => {
            // Treated as absent: an incompatible blob shape resets the cart.
            warn!(error = %e, "malformed persisted cart, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;
    use crate::storage::MemoryStore;

    fn empty_cart() -> CartStore {
        CartStore::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_merges_quantities_per_product() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 10), 2);
        cart.add(product("1", 100, 10), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_subtotal_uses_discounted_prices() {
        let mut cart = empty_cart();
        // price=100, discount=10% -> 90 each; quantity 2 -> 180
        cart.add(product("1", 100, 10), 2);
        assert_eq!(cart.subtotal(), Decimal::from(180));

        // price=200, no discount; quantity 1 -> subtotal 380, 3 items
        cart.add(product("2", 200, 0), 1);
        assert_eq!(cart.subtotal(), Decimal::from(380));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_set_quantity_is_exact_not_additive() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 0), 5);
        cart.set_quantity(&ProductId::new("1"), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_the_line() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 0), 2);
        cart.set_quantity(&ProductId::new("1"), 0);

        assert!(!cart.contains(&ProductId::new("1")));
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 0), 1);

        cart.remove(&ProductId::new("99"));
        cart.set_quantity(&ProductId::new("99"), 7);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_zero_is_a_no_op() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = empty_cart();
        cart.add(product("1", 100, 0), 2);
        cart.add(product("2", 50, 0), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_subtotal_is_order_independent() {
        let storage_a = Arc::new(MemoryStore::new());
        let storage_b = Arc::new(MemoryStore::new());
        let mut a = CartStore::load(storage_a);
        let mut b = CartStore::load(storage_b);

        a.add(product("1", 100, 10), 2);
        a.add(product("2", 200, 0), 1);
        a.remove(&ProductId::new("1"));
        a.add(product("1", 100, 10), 2);

        b.add(product("2", 200, 0), 1);
        b.add(product("1", 100, 10), 2);

        // Same final multiset of lines, same subtotal.
        assert_eq!(a.subtotal(), b.subtotal());
        assert_eq!(a.total_items(), b.total_items());
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let storage = Arc::new(MemoryStore::new());
        {
            let mut cart = CartStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
            cart.add(product("1", 100, 10), 2);
            cart.add(product("2", 200, 0), 1);
        }

        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.total_items(), 3);
        assert_eq!(reloaded.subtotal(), Decimal::from(380));
    }

    #[test]
    fn test_malformed_blob_falls_back_to_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::CART, "{not valid json").unwrap();

        let cart = CartStore::load(storage);
        assert!(cart.is_empty());
    }
}
