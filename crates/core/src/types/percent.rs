//! Percentage values clamped to the 0–100 range.
//!
//! Used for product discounts and coupon rates. Arithmetic is decimal,
//! matching [`crate::Price`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A percentage in the inclusive range 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    /// A zero percentage (no discount).
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a percentage, rejecting values outside 0–100.
    ///
    /// # Errors
    ///
    /// Returns [`PercentError::OutOfRange`] if `value` is negative or
    /// greater than 100.
    pub fn try_new(value: Decimal) -> Result<Self, PercentError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(PercentError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a percentage from a whole number 0–100.
    ///
    /// # Errors
    ///
    /// Returns [`PercentError::OutOfRange`] if `value` is greater than 100.
    pub fn from_int(value: u32) -> Result<Self, PercentError> {
        Self::try_new(Decimal::from(value))
    }

    /// The raw percentage value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// This percentage of `amount`, i.e. `amount * percent / 100`.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }

    /// `amount` reduced by this percentage, i.e. `amount - amount * percent / 100`.
    #[must_use]
    pub fn discount(self, amount: Decimal) -> Decimal {
        amount - self.of(amount)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = PercentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Error constructing a [`Percent`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PercentError {
    #[error("percentage out of range (expected 0-100, got {0})")]
    OutOfRange(Decimal),
}
