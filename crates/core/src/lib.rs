//! Carewell Core - Shared types library.
//!
//! This crate provides common types used across all Carewell components:
//! - `storefront` - Catalog, cart, wishlist, coupon, and checkout stores
//! - `cli` - Command-line tools for inspecting and driving the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no catalog
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, percentages,
//!   and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
