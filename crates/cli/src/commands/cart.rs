//! Cart management commands.

use clap::Subcommand;

use carewell_core::ProductId;
use carewell_storefront::{Result, Storefront};

use super::money;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Units to add (merged into any existing line)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Set a line's quantity exactly (0 removes the line)
    Set {
        /// Product id
        id: String,
        /// New quantity
        quantity: u32,
    },
    /// Show cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

/// Dispatch a cart subcommand.
///
/// # Errors
///
/// Returns a catalog not-found error from `add` with an unknown product id.
#[allow(clippy::print_stdout)]
pub fn run(storefront: &mut Storefront, action: &CartAction) -> Result<()> {
    match action {
        CartAction::Add { id, quantity } => {
            storefront.add_to_cart(&ProductId::new(id.as_str()), *quantity)?;
            println!("added {quantity} x {id}");
        }
        CartAction::Remove { id } => {
            storefront.cart_mut().remove(&ProductId::new(id.as_str()));
            println!("removed {id}");
        }
        CartAction::Set { id, quantity } => {
            storefront
                .cart_mut()
                .set_quantity(&ProductId::new(id.as_str()), *quantity);
            println!("set {id} to {quantity}");
        }
        CartAction::Show => {
            if storefront.cart().is_empty() {
                println!("cart is empty");
                return Ok(());
            }
            for line in storefront.cart().lines() {
                println!(
                    "{:>3} x {:<30} {:>10}  ({} each)",
                    line.quantity,
                    line.product.name,
                    money(storefront, line.line_total()),
                    money(storefront, line.product.discounted_price()),
                );
            }
            println!(
                "{} item(s), subtotal {}",
                storefront.cart().total_items(),
                money(storefront, storefront.cart().subtotal()),
            );
        }
        CartAction::Clear => {
            storefront.cart_mut().clear();
            println!("cart cleared");
        }
    }
    Ok(())
}
