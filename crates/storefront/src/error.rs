//! Unified error handling.
//!
//! Provides a unified [`Error`] type wrapping the per-module errors.
//! Library entry points that cross module boundaries (the [`crate::Storefront`]
//! aggregate, the CLI) return `Result<T, Error>`; individual stores keep
//! their narrower error types.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::coupon::CouponError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Coupon was rejected.
    #[error("Coupon error: {0}")]
    Coupon(#[from] CouponError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Persistence backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
