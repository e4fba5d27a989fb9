//! Application state shared across consumers.
//!
//! [`Storefront`] replaces the original's module-level singletons: one
//! explicit aggregate constructed at session start and passed by reference
//! to whatever drives it. All stores share the same persistence port, each
//! under its own key, and execution is a single context, so the aggregate
//! hands out plain `&`/`&mut` accessors rather than wrapping everything in
//! locks.

use std::sync::Arc;

use chrono::Utc;

use carewell_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::cache::CachedCatalog;
use crate::catalog::{CatalogSource, MemoryCatalog, Product};
use crate::checkout::{Order, OrderStore};
use crate::config::StorefrontConfig;
use crate::coupon::{AppliedCoupon, CouponBook};
use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::wishlist::WishlistStore;

/// One storefront session: catalog plus all mutable stores.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CachedCatalog<MemoryCatalog>,
    coupons: CouponBook,
    cart: CartStore,
    wishlist: WishlistStore,
    orders: OrderStore,
}

impl Storefront {
    /// Build a storefront over a catalog and a persistence port.
    ///
    /// Loads cart, wishlist, and order history from the port; each falls
    /// back to empty on missing or malformed state.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: MemoryCatalog,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            config,
            catalog: CachedCatalog::new(catalog),
            coupons: CouponBook::standard(),
            cart: CartStore::load(Arc::clone(&storage)),
            wishlist: WishlistStore::load(Arc::clone(&storage)),
            orders: OrderStore::load(storage),
        }
    }

    /// Replace the standard coupon table.
    #[must_use]
    pub fn with_coupons(mut self, coupons: CouponBook) -> Self {
        self.coupons = coupons;
        self
    }

    /// Storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Read-only catalog access.
    #[must_use]
    pub const fn catalog(&self) -> &CachedCatalog<MemoryCatalog> {
        &self.catalog
    }

    /// Available coupons.
    #[must_use]
    pub const fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable cart access.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The wishlist store.
    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// Mutable wishlist access.
    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Order history.
    #[must_use]
    pub const fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Mutable order access.
    pub const fn orders_mut(&mut self) -> &mut OrderStore {
        &mut self.orders
    }

    /// Look up a product and add it to the cart.
    ///
    /// # Errors
    ///
    /// Returns a catalog not-found error for an unknown product id.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> Result<()> {
        let product = self.catalog.get_by_id(id)?;
        self.cart.add(product, quantity);
        Ok(())
    }

    /// Look up a product and save it to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns a catalog not-found error for an unknown product id.
    pub fn add_to_wishlist(&mut self, id: &ProductId) -> Result<Product> {
        let product = self.catalog.get_by_id(id)?;
        self.wishlist.add(product.clone());
        Ok(product)
    }

    /// Evaluate a coupon code against the current cart subtotal, as of today.
    ///
    /// # Errors
    ///
    /// Returns a coupon rejection (unknown, expired, or minimum not met).
    pub fn apply_coupon(&self, code: &str) -> Result<AppliedCoupon> {
        let today = Utc::now().date_naive();
        Ok(self.coupons.evaluate(code, self.cart.subtotal(), today)?)
    }

    /// Place an order from the current cart, optionally with a coupon code.
    ///
    /// The coupon is evaluated against the cart subtotal immediately before
    /// the order is placed; the cart is cleared on success.
    ///
    /// # Errors
    ///
    /// Returns a coupon rejection or an empty-cart checkout error.
    pub fn checkout(&mut self, coupon_code: Option<&str>) -> Result<Order> {
        let applied = match coupon_code {
            Some(code) => Some(self.apply_coupon(code)?),
            None => None,
        };
        Ok(self.orders.place_order(&mut self.cart, applied.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    fn storefront() -> Storefront {
        let catalog = MemoryCatalog::new(vec![
            product("1", 100, 10),
            product("2", 200, 0),
        ]);
        Storefront::new(
            StorefrontConfig::default(),
            catalog,
            Arc::new(MemoryStore::new()),
        )
    }

    #[test]
    fn test_add_to_cart_via_catalog_lookup() {
        let mut store = storefront();
        store.add_to_cart(&ProductId::new("1"), 2).unwrap();
        store.add_to_cart(&ProductId::new("2"), 1).unwrap();

        assert_eq!(store.cart().total_items(), 3);
        assert_eq!(store.cart().subtotal(), Decimal::from(380));
    }

    #[test]
    fn test_unknown_product_surfaces_not_found() {
        let mut store = storefront();
        let err = store.add_to_cart(&ProductId::new("99"), 1).unwrap_err();
        assert!(matches!(err, crate::error::Error::Catalog(_)));
    }

    #[test]
    fn test_checkout_with_coupon_end_to_end() {
        let mut store = storefront();
        store.add_to_cart(&ProductId::new("1"), 2).unwrap();
        store.add_to_cart(&ProductId::new("2"), 1).unwrap();

        let order = store.checkout(Some("HEALTH15")).unwrap();
        assert_eq!(order.subtotal, Decimal::from(380));
        assert_eq!(order.discount, Decimal::new(570, 1));
        assert_eq!(order.total, Decimal::new(3230, 1));
        assert!(store.cart().is_empty());
        assert_eq!(store.orders().list().len(), 1);
    }

    #[test]
    fn test_rejected_coupon_leaves_cart_intact() {
        let mut store = storefront();
        store.add_to_cart(&ProductId::new("1"), 1).unwrap();

        let err = store.checkout(Some("BOGUS")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Coupon(_)));
        assert_eq!(store.cart().total_items(), 1);
        assert!(store.orders().list().is_empty());
    }
}
