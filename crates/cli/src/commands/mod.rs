//! CLI command implementations, one module per top-level subcommand.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod wishlist;

use carewell_core::Price;
use carewell_storefront::Storefront;
use rust_decimal::Decimal;

/// Format an amount in the configured display currency.
pub fn money(storefront: &Storefront, amount: Decimal) -> String {
    Price::new(amount, storefront.config().currency).display()
}
