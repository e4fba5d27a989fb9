//! Coupon, checkout, and order history commands.

use clap::Subcommand;

use carewell_core::OrderId;
use carewell_storefront::{Result, Storefront};

use super::money;

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List placed orders, oldest first
    List,
    /// Show one order in full
    Show {
        /// Order id
        id: String,
    },
    /// Advance an order to its next fulfilment status
    Advance {
        /// Order id
        id: String,
    },
}

/// Evaluate a coupon against the current cart subtotal.
///
/// # Errors
///
/// Returns the coupon rejection (unknown, expired, or minimum not met).
#[allow(clippy::print_stdout)]
pub fn apply_coupon(storefront: &Storefront, code: &str) -> Result<()> {
    let applied = storefront.apply_coupon(code)?;
    println!(
        "{}: {} off — saves {} on the current cart",
        applied.code,
        applied.percent,
        money(storefront, applied.amount),
    );
    Ok(())
}

/// Place an order from the current cart.
///
/// # Errors
///
/// Returns a coupon rejection or an empty-cart checkout error.
#[allow(clippy::print_stdout)]
pub fn checkout(storefront: &mut Storefront, coupon: Option<&str>) -> Result<()> {
    let order = storefront.checkout(coupon)?;
    println!("order {} placed", order.id);
    println!("  subtotal: {}", money(storefront, order.subtotal));
    if let Some(code) = &order.coupon_code {
        println!("  coupon:   {code} (-{})", money(storefront, order.discount));
    }
    println!("  total:    {}", money(storefront, order.total));
    Ok(())
}

/// Dispatch an orders subcommand.
///
/// # Errors
///
/// Returns an unknown-order error from `show` or `advance`.
#[allow(clippy::print_stdout)]
pub fn run(storefront: &mut Storefront, action: &OrdersAction) -> Result<()> {
    match action {
        OrdersAction::List => {
            if storefront.orders().list().is_empty() {
                println!("no orders yet");
                return Ok(());
            }
            for order in storefront.orders().list() {
                println!(
                    "{}  {}  {:<10}  {} item(s)  {}",
                    order.id,
                    order.placed_at.format("%Y-%m-%d %H:%M"),
                    order.status,
                    order.lines.len(),
                    money(storefront, order.total),
                );
            }
        }
        OrdersAction::Show { id } => {
            let order = storefront.orders().get(&OrderId::new(id.as_str()))?;
            println!("order {} — {}", order.id, order.status);
            println!("  placed at {}", order.placed_at.format("%Y-%m-%d %H:%M:%S UTC"));
            for line in &order.lines {
                println!("  {:>3} x {}", line.quantity, line.product.name);
            }
            println!("  subtotal: {}", money(storefront, order.subtotal));
            if let Some(code) = &order.coupon_code {
                println!("  coupon:   {code} (-{})", money(storefront, order.discount));
            }
            println!("  total:    {}", money(storefront, order.total));
        }
        OrdersAction::Advance { id } => {
            let status = storefront.orders_mut().advance_status(&OrderId::new(id.as_str()))?;
            println!("order {id} is now {status}");
        }
    }
    Ok(())
}
