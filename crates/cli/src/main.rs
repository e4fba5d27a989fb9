//! Carewell CLI - Drive the storefront stores from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! carewell catalog list --category "Pain Relief" --page 2
//! carewell catalog show 12
//!
//! # Manage the cart
//! carewell cart add 12 --quantity 2
//! carewell cart set 12 5
//! carewell cart show
//!
//! # Apply a coupon and check out
//! carewell coupon HEALTH15
//! carewell checkout --coupon HEALTH15
//!
//! # Inspect orders
//! carewell orders list
//! carewell orders advance <order-id>
//! ```
//!
//! State persists as JSON files under `CAREWELL_DATA_DIR` (default
//! `./data`); the catalog loads from the JSON file named by
//! `CAREWELL_CATALOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carewell_storefront::{
    JsonFileStore, MemoryCatalog, Storefront, StorefrontConfig,
};

mod commands;

#[derive(Parser)]
#[command(name = "carewell")]
#[command(author, version, about = "Carewell storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
    /// Evaluate a coupon code against the current cart
    Coupon {
        /// Coupon code, exactly as displayed (case-sensitive)
        code: String,
    },
    /// Place an order from the current cart
    Checkout {
        /// Coupon code to apply at checkout
        #[arg(short, long)]
        coupon: Option<String>,
    },
    /// Inspect and advance placed orders
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrdersAction,
    },
}

fn main() {
    // Initialize tracing; default to warnings so command output stays clean.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = load_catalog(&config)?;
    let storage = Arc::new(JsonFileStore::open(&config.data_dir)?);
    let mut storefront = Storefront::new(config, catalog, storage);

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&storefront, &action)?,
        Commands::Cart { action } => commands::cart::run(&mut storefront, &action)?,
        Commands::Wishlist { action } => commands::wishlist::run(&mut storefront, &action)?,
        Commands::Coupon { code } => commands::orders::apply_coupon(&storefront, &code)?,
        Commands::Checkout { coupon } => {
            commands::orders::checkout(&mut storefront, coupon.as_deref())?;
        }
        Commands::Orders { action } => commands::orders::run(&mut storefront, &action)?,
    }
    Ok(())
}

/// Load the catalog file named by the configuration, or start empty.
fn load_catalog(config: &StorefrontConfig) -> Result<MemoryCatalog, Box<dyn std::error::Error>> {
    match &config.catalog_path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let catalog = MemoryCatalog::from_json(&json)?;
            tracing::info!(products = catalog.len(), path = %path.display(), "catalog loaded");
            Ok(catalog)
        }
        None => {
            tracing::warn!("CAREWELL_CATALOG not set, starting with an empty catalog");
            Ok(MemoryCatalog::default())
        }
    }
}
