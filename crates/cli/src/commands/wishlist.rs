//! Wishlist management commands.

use clap::Subcommand;

use carewell_core::ProductId;
use carewell_storefront::{Result, Storefront};

use super::money;

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Save a product to the wishlist
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        id: String,
    },
    /// Show saved products
    Show,
}

/// Dispatch a wishlist subcommand.
///
/// # Errors
///
/// Returns a catalog not-found error from `add` with an unknown product id.
#[allow(clippy::print_stdout)]
pub fn run(storefront: &mut Storefront, action: &WishlistAction) -> Result<()> {
    match action {
        WishlistAction::Add { id } => {
            let product = storefront.add_to_wishlist(&ProductId::new(id.as_str()))?;
            println!("saved {} ({})", product.name, product.id);
        }
        WishlistAction::Remove { id } => {
            storefront.wishlist_mut().remove(&ProductId::new(id.as_str()));
            println!("removed {id}");
        }
        WishlistAction::Show => {
            if storefront.wishlist().total_items() == 0 {
                println!("wishlist is empty");
                return Ok(());
            }
            for product in storefront.wishlist().entries() {
                println!(
                    "{:>6}  {}  {}",
                    product.id,
                    money(storefront, product.discounted_price()),
                    product.name,
                );
            }
            println!("{} saved product(s)", storefront.wishlist().total_items());
        }
    }
    Ok(())
}
