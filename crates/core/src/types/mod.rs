//! Core types for Carewell.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod percent;
pub mod price;
pub mod status;

pub use id::*;
pub use percent::{Percent, PercentError};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use status::{OrderStatus, OrderStatusParseError};
