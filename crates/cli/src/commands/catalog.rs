//! Catalog browsing commands.

use clap::Subcommand;
use rust_decimal::Decimal;

use carewell_core::ProductId;
use carewell_storefront::catalog::CatalogSource;
use carewell_storefront::{ProductFilter, Result, Storefront, paginate};

use super::money;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List products, with optional filters and pagination
    List {
        /// Case-insensitive substring matched against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Restrict to a brand (repeatable)
        #[arg(short, long)]
        brand: Vec<String>,

        /// Minimum discounted price
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum discounted price
        #[arg(long)]
        max_price: Option<Decimal>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one product in full
    Show {
        /// Product id
        id: String,
    },
}

/// Dispatch a catalog subcommand.
///
/// # Errors
///
/// Returns a catalog not-found error from `show` with an unknown id.
#[allow(clippy::print_stdout)]
pub fn run(storefront: &Storefront, action: &CatalogAction) -> Result<()> {
    match action {
        CatalogAction::List {
            search,
            category,
            brand,
            min_price,
            max_price,
            page,
        } => {
            let mut filter = ProductFilter::new();
            if let Some(query) = search {
                filter = filter.with_search(query);
            }
            filter.categories.clone_from(category);
            filter.brands.clone_from(brand);
            if min_price.is_some() || max_price.is_some() {
                let lo = min_price.unwrap_or(Decimal::ZERO);
                let hi = max_price.unwrap_or(Decimal::MAX);
                filter = filter.with_price_range(lo, hi);
            }

            let all = storefront.catalog().list_all();
            let filtered = filter.apply(&all);
            let window = paginate(&filtered, *page, storefront.config().page_size);

            for product in &window.items {
                let stock = if product.in_stock { "" } else { "  [out of stock]" };
                println!(
                    "{:>6}  {}  {} ({}){stock}",
                    product.id,
                    money(storefront, product.discounted_price()),
                    product.name,
                    product.brand,
                );
            }
            println!(
                "page {}/{} — {} matching product(s)",
                window.page, window.total_pages, window.total_items
            );
        }
        CatalogAction::Show { id } => {
            let product = storefront.catalog().get_by_id(&ProductId::new(id.as_str()))?;
            println!("{} — {}", product.id, product.name);
            println!("  brand:    {}", product.brand);
            println!("  category: {}", product.category);
            println!(
                "  price:    {} (list {}, {} off)",
                money(storefront, product.discounted_price()),
                money(storefront, product.price),
                product.discount,
            );
            println!("  rating:   {} ({} reviews)", product.rating, product.review_count);
            println!("  in stock: {}", product.in_stock);
            if !product.description.is_empty() {
                println!("  {}", product.description);
            }
            for warning in &product.warnings {
                println!("  warning: {warning}");
            }
        }
    }
    Ok(())
}
