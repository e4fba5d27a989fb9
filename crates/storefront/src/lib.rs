//! Carewell Storefront - Pharmacy storefront domain library.
//!
//! The state-management core of an online pharmacy storefront: product
//! catalog with filtering and pagination, shopping cart, wishlist, coupon
//! evaluation, and checkout with order history.
//!
//! # Architecture
//!
//! - Stores are explicit objects, constructed once per session and passed
//!   by reference; there is no global state.
//! - Persistence goes through the [`storage::KeyValueStore`] port: cart,
//!   wishlist, and orders each serialize to JSON under their own fixed key.
//!   Malformed persisted state is discarded, never surfaced.
//! - The catalog is read-only behind the [`catalog::CatalogSource`] trait;
//!   [`catalog::cache::CachedCatalog`] adds a bounded read-through cache.
//! - Execution is a single context: mutations apply in call order and no
//!   locking discipline is required of callers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod coupon;
pub mod error;
pub mod state;
pub mod storage;
pub mod wishlist;

pub use cart::{CartLine, CartStore};
pub use catalog::query::{Page, ProductFilter, paginate};
pub use catalog::{CatalogError, CatalogPage, CatalogSource, MemoryCatalog, Product};
pub use checkout::{CheckoutError, Order, OrderStore};
pub use config::{ConfigError, StorefrontConfig};
pub use coupon::{AppliedCoupon, Coupon, CouponBook, CouponError};
pub use error::{Error, Result};
pub use state::Storefront;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use wishlist::WishlistStore;
