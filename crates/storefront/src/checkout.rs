//! Checkout and order history.
//!
//! Placing an order snapshots the cart lines and totals, appends the order
//! to a persisted list, and clears the cart. Orders then progress through
//! the fulfilment statuses via [`OrderStore::advance_status`]. There is no
//! payment step here: the storefront records the order and hands off.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use carewell_core::{OrderId, OrderStatus};

use crate::cart::{CartLine, CartStore};
use crate::coupon::AppliedCoupon;
use crate::storage::{KeyValueStore, keys};

/// A placed order: an immutable snapshot of the cart at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    /// Sum of discounted line totals at placement time.
    pub subtotal: Decimal,
    /// Coupon discount amount, zero when no coupon was applied.
    pub discount: Decimal,
    /// Code of the applied coupon, if any.
    pub coupon_code: Option<String>,
    /// `subtotal - discount`.
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Checkout and order lookup errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one cart line.
    #[error("cannot place an order from an empty cart")]
    EmptyCart,

    /// No order with the given id.
    #[error("order not found: {0}")]
    UnknownOrder(OrderId),
}

/// Persisted order history with checkout entry point.
pub struct OrderStore {
    orders: Vec<Order>,
    storage: Arc<dyn KeyValueStore>,
}

impl OrderStore {
    /// Load order history from storage, starting empty when the blob is
    /// missing or no longer deserializes.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let orders = load_orders(storage.as_ref());
        Self { orders, storage }
    }

    /// Orders in placement order, oldest first.
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownOrder`] for an unknown id.
    pub fn get(&self, id: &OrderId) -> Result<&Order, CheckoutError> {
        self.orders
            .iter()
            .find(|order| &order.id == id)
            .ok_or_else(|| CheckoutError::UnknownOrder(id.clone()))
    }

    /// Place an order from the current cart, clearing the cart on success.
    ///
    /// The coupon, when supplied, must have been evaluated against the same
    /// cart's subtotal; its amount is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        coupon: Option<&AppliedCoupon>,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal = cart.subtotal();
        let discount = coupon.map_or(Decimal::ZERO, |c| c.amount);
        let order = Order {
            id: OrderId::new(Uuid::new_v4().to_string()),
            lines: cart.lines().to_vec(),
            subtotal,
            discount,
            coupon_code: coupon.map(|c| c.code.clone()),
            total: subtotal - discount,
            placed_at: Utc::now(),
            status: OrderStatus::Placed,
        };

        self.orders.push(order.clone());
        self.persist();
        cart.clear();

        info!(
            order_id = %order.id,
            items = order.lines.len(),
            total = %order.total,
            "order placed"
        );
        Ok(order)
    }

    /// Advance an order to its next fulfilment status.
    ///
    /// Delivered orders stay delivered.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownOrder`] for an unknown id.
    pub fn advance_status(&mut self, id: &OrderId) -> Result<OrderStatus, CheckoutError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| CheckoutError::UnknownOrder(id.clone()))?;

        let next = order.status.advance();
        if next != order.status {
            debug!(order_id = %id, from = %order.status, to = %next, "order status advanced");
            order.status = next;
            self.persist();
        }
        Ok(next)
    }

    fn persist(&self) {
        match serde_json::to_string(&self.orders) {
            Ok(blob) => {
                if let Err(e) = self.storage.set(keys::ORDERS, &blob) {
                    error!(error = %e, "failed to persist orders");
                }
            }
            Err(e) => error!(error = %e, "failed to serialize orders"),
        }
    }
}

fn load_orders(storage: &dyn KeyValueStore) -> Vec<Order> {
    let blob = match storage.get(keys::ORDERS) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "failed to read persisted orders, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Order>>(&blob) {
        Ok(orders) => {
            debug!(orders = orders.len(), "loaded persisted orders");
            orders
        }
        Err(e) => {
            warn!(error = %e, "malformed persisted orders, starting empty");
            Vec::new()
        }
    }
}
