//! Read-through cache for catalog sources.
//!
//! A remote-backed catalog pays a lookup cost per call; page views hit the
//! same product and page queries repeatedly. [`CachedCatalog`] wraps any
//! [`CatalogSource`] with a bounded in-process cache. Lookup misses
//! (`NotFound`) are not cached.

use std::time::Duration;

use moka::sync::Cache;
use tracing::trace;

use carewell_core::ProductId;

use super::{CatalogError, CatalogPage, CatalogSource, Product};

/// Cache key for catalog queries.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    All,
    Product(ProductId),
    Category(String),
    Page { page: usize, page_size: usize },
}

/// Cached value types.
#[derive(Clone)]
enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
    Page(CatalogPage),
}

/// Default number of cached entries.
const DEFAULT_CAPACITY: u64 = 1024;
/// Default time-to-live for cached entries.
const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A [`CatalogSource`] wrapper that caches query results.
pub struct CachedCatalog<S> {
    inner: S,
    cache: Cache<CacheKey, CacheValue>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    /// Wrap `inner` with the default capacity and TTL.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self::with_settings(inner, DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Wrap `inner` with explicit cache settings.
    #[must_use]
    pub fn with_settings(inner: S, capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }

    /// Drop every cached entry, forcing the next queries through to the source.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Access the wrapped source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: CatalogSource> CatalogSource for CachedCatalog<S> {
    fn list_all(&self) -> Vec<Product> {
        if let Some(CacheValue::Products(products)) = self.cache.get(&CacheKey::All) {
            trace!("catalog cache hit: all");
            return products;
        }
        let products = self.inner.list_all();
        self.cache
            .insert(CacheKey::All, CacheValue::Products(products.clone()));
        products
    }

    fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let key = CacheKey::Product(id.clone());
        if let Some(CacheValue::Product(product)) = self.cache.get(&key) {
            trace!(%id, "catalog cache hit: product");
            return Ok(*product);
        }
        let product = self.inner.get_by_id(id)?;
        self.cache
            .insert(key, CacheValue::Product(Box::new(product.clone())));
        Ok(product)
    }

    fn list_by_category(&self, category: &str) -> Vec<Product> {
        let key = CacheKey::Category(category.to_owned());
        if let Some(CacheValue::Products(products)) = self.cache.get(&key) {
            trace!(category, "catalog cache hit: category");
            return products;
        }
        let products = self.inner.list_by_category(category);
        self.cache
            .insert(key, CacheValue::Products(products.clone()));
        products
    }

    fn list_page(&self, page: usize, page_size: usize) -> CatalogPage {
        let key = CacheKey::Page { page, page_size };
        if let Some(CacheValue::Page(cached)) = self.cache.get(&key) {
            trace!(page, page_size, "catalog cache hit: page");
            return cached;
        }
        let result = self.inner.list_page(page, page_size);
        self.cache.insert(key, CacheValue::Page(result.clone()));
        result
    }
}
