//! Integration tests for Carewell.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p carewell-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Cart, wishlist, coupon, and checkout end to end
//! - `persistence` - State surviving restarts via the file-backed store
//! - `catalog_browsing` - Filtering and pagination over a realistic catalog
//!
//! Tests run against the real [`carewell_storefront::JsonFileStore`] in a
//! temporary directory; no external services are required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use carewell_storefront::{
    JsonFileStore, MemoryCatalog, Product, Storefront, StorefrontConfig,
};
use rust_decimal::Decimal;

/// Build a product record with the fields the tests care about.
#[must_use]
pub fn product(id: &str, name: &str, category: &str, brand: &str, price: i64, discount: u32) -> Product {
    let json = serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{name} from {brand}"),
        "price": price.to_string(),
        "discount": discount.to_string(),
        "category": category,
        "brand": brand,
        "in_stock": true,
    });
    serde_json::from_value(json).expect("valid product fixture")
}

/// A small but realistic pharmacy catalog.
#[must_use]
pub fn pharmacy_catalog() -> MemoryCatalog {
    MemoryCatalog::new(vec![
        product("1", "Paracetamol 500mg", "Fever", "HealthPlus", 100, 10),
        product("2", "Vitamin C Tablets", "Vitamins", "VitaEssence", 200, 0),
        product("3", "Cough Syrup 100ml", "Cold & Cough", "HealthPlus", 150, 20),
        product("4", "Insulin Pen", "Diabetes", "MediLife", 900, 5),
        product("5", "Baby Lotion", "Baby Care", "NatureCure", 250, 15),
        product("6", "Pain Relief Gel", "Pain Relief", "HealthPlus", 180, 0),
        product("7", "Multivitamin Gummies", "Vitamins", "VitaEssence", 350, 10),
    ])
}

/// A storefront over the file store rooted at `dir`.
#[must_use]
pub fn storefront_at(dir: &std::path::Path) -> Storefront {
    let storage = Arc::new(JsonFileStore::open(dir).expect("temp dir is writable"));
    Storefront::new(StorefrontConfig::default(), pharmacy_catalog(), storage)
}

/// Decimal from an integer, for terse assertions.
#[must_use]
pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}
