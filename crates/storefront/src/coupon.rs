//! Coupon table and evaluator.
//!
//! Codes match exactly and case-sensitively. A coupon may carry a minimum
//! order amount and an expiry date; both are enforced only when present,
//! and the standard table leaves them off the codes that ship without
//! restrictions. Evaluation is a pure function of (code, subtotal, date) —
//! there is no usage counting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use carewell_core::Percent;

/// A discount code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Case-sensitive code as displayed to customers.
    pub code: String,
    /// Flat percentage off the subtotal.
    pub percent: Percent,
    /// Minimum subtotal required, if any.
    #[serde(default)]
    pub min_order: Option<Decimal>,
    /// Last day the coupon is valid, inclusive, if any.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// Marketing copy shown alongside the code.
    #[serde(default)]
    pub description: String,
}

/// A successfully applied coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    pub code: String,
    pub percent: Percent,
    /// Discount amount: `subtotal * percent / 100`.
    pub amount: Decimal,
}

/// Coupon rejection reasons.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponError {
    /// No coupon with this code.
    #[error("no such coupon: {0}")]
    Unknown(String),

    /// The coupon's validity window has passed.
    #[error("coupon {code} expired on {valid_until}")]
    Expired { code: String, valid_until: NaiveDate },

    /// The order subtotal is below the coupon's minimum.
    #[error("coupon {code} requires a minimum order of {min_order}")]
    MinOrderNotMet { code: String, min_order: Decimal },
}

/// Lookup table of available coupons.
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    coupons: HashMap<String, Coupon>,
}

impl CouponBook {
    /// Build a book from an explicit coupon list.
    #[must_use]
    pub fn new(coupons: impl IntoIterator<Item = Coupon>) -> Self {
        Self {
            coupons: coupons
                .into_iter()
                .map(|coupon| (coupon.code.clone(), coupon))
                .collect(),
        }
    }

    /// The standard storefront coupon table.
    ///
    /// # Panics
    ///
    /// Never panics; the percentages are compile-time constants within range.
    #[must_use]
    pub fn standard() -> Self {
        let percent = |value| Percent::from_int(value).expect("static percent in range");
        Self::new([
            Coupon {
                code: "CAREWELL20".to_owned(),
                percent: percent(20),
                min_order: Some(Decimal::from(500)),
                valid_until: None,
                description: "20% off on all products".to_owned(),
            },
            Coupon {
                code: "HEALTH15".to_owned(),
                percent: percent(15),
                min_order: None,
                valid_until: None,
                description: "15% off on health supplements".to_owned(),
            },
            Coupon {
                code: "CARE10".to_owned(),
                percent: percent(10),
                min_order: None,
                valid_until: None,
                description: "10% off on all products".to_owned(),
            },
            Coupon {
                code: "FIRST5".to_owned(),
                percent: percent(5),
                min_order: None,
                valid_until: None,
                description: "5% off for first-time customers".to_owned(),
            },
            Coupon {
                code: "BABY25".to_owned(),
                percent: percent(25),
                min_order: Some(Decimal::from(800)),
                valid_until: None,
                description: "25% off on baby care products".to_owned(),
            },
            Coupon {
                code: "SKIN30".to_owned(),
                percent: percent(30),
                min_order: Some(Decimal::from(1200)),
                valid_until: None,
                description: "30% off on the skin care range".to_owned(),
            },
        ])
    }

    /// Look up a coupon without evaluating it.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(code)
    }

    /// All coupons, for display. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.values()
    }

    /// Evaluate a code against an order subtotal on a given date.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::Unknown`] for an unrecognized code,
    /// [`CouponError::Expired`] when `on` is past the coupon's validity,
    /// and [`CouponError::MinOrderNotMet`] when the subtotal is too small.
    pub fn evaluate(
        &self,
        code: &str,
        subtotal: Decimal,
        on: NaiveDate,
    ) -> Result<AppliedCoupon, CouponError> {
        let coupon = self
            .coupons
            .get(code)
            .ok_or_else(|| CouponError::Unknown(code.to_owned()))?;

        if let Some(valid_until) = coupon.valid_until {
            if on > valid_until {
                return Err(CouponError::Expired {
                    code: coupon.code.clone(),
                    valid_until,
                });
            }
        }

        if let Some(min_order) = coupon.min_order {
            if subtotal < min_order {
                return Err(CouponError::MinOrderNotMet {
                    code: coupon.code.clone(),
                    min_order,
                });
            }
        }

        Ok(AppliedCoupon {
            code: coupon.code.clone(),
            percent: coupon.percent,
            amount: coupon.percent.of(subtotal),
        })
    }
}
