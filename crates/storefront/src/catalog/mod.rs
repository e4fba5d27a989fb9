//! Product catalog: records, source trait, and the in-memory implementation.
//!
//! The catalog is read-only from the storefront's perspective. Products are
//! created by the catalog source and never mutated by consumers; stores that
//! need product data (cart, wishlist, orders) snapshot it.
//!
//! [`CatalogSource`] is the collaborator seam: here it is backed by a fixed
//! in-memory list, in a real deployment it would front a remote API.

pub mod cache;
pub mod query;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use carewell_core::{Percent, ProductId};

use query::paginate;

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReview {
    pub name: String,
    /// Star rating, 0–5.
    pub rating: Decimal,
    pub date: NaiveDate,
    pub comment: String,
}

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    /// Unit price in the currency's major unit, non-negative.
    pub price: Decimal,
    /// Catalog discount applied to the unit price.
    #[serde(default)]
    pub discount: Percent,
    /// Average star rating, 0–5.
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub review_count: u32,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub sku: String,
    pub in_stock: bool,
    #[serde(default)]
    pub prescription_required: bool,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub usage: String,
    /// Storage instructions ("Store in a cool, dry place").
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<ProductReview>,
}

impl Product {
    /// Unit price after the catalog discount: `price - price * discount / 100`.
    #[must_use]
    pub fn discounted_price(&self) -> Decimal {
        self.discount.discount(self.price)
    }
}

/// Catalog lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Catalog data failed to deserialize.
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub total_pages: usize,
    pub total_products: usize,
}

/// Read-only product catalog.
pub trait CatalogSource: Send + Sync {
    /// All products in catalog order.
    fn list_all(&self) -> Vec<Product>;

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// Products in a category, in catalog order. Unknown category is empty.
    fn list_by_category(&self, category: &str) -> Vec<Product>;

    /// A 1-based page of the full catalog.
    fn list_page(&self, page: usize, page_size: usize) -> CatalogPage;
}

/// Catalog backed by a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Create a catalog from a product list. Order is preserved.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the JSON does not match the
    /// product schema.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogSource for MemoryCatalog {
    fn list_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    fn list_page(&self, page: usize, page_size: usize) -> CatalogPage {
        let paged = paginate(&self.products, page, page_size);
        CatalogPage {
            products: paged.items,
            page: paged.page,
            total_pages: paged.total_pages,
            total_products: paged.total_items,
        }
    }
}
