//! Filtering and pagination over the product list.
//!
//! Filtering is a stable, conjunctive pass: every active dimension must
//! match (AND across dimensions), while a multi-value dimension matches if
//! any of its values does (OR within categories, OR within brands). Source
//! order is preserved; there is no re-sort.

use rust_decimal::Decimal;

use super::Product;

/// Filter criteria for a catalog query.
///
/// Every field is optional; the default filter matches everything. Empty
/// category and brand lists mean "no filter", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Inclusive `[lo, hi]` range applied to the *discounted* unit price.
    pub price_range: Option<(Decimal, Decimal)>,
    /// Allowed categories; empty allows all.
    pub categories: Vec<String>,
    /// Allowed brands; empty allows all.
    pub brands: Vec<String>,
}

impl ProductFilter {
    /// A filter that matches every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to products whose name or description contains `query`.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Restrict the discounted price to the inclusive range `[lo, hi]`.
    #[must_use]
    pub fn with_price_range(mut self, lo: Decimal, hi: Decimal) -> Self {
        self.price_range = Some((lo, hi));
        self
    }

    /// Allow an additional category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Allow an additional brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Whether a single product satisfies every active dimension.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.search {
            let query = query.trim().to_lowercase();
            if !query.is_empty() {
                let name_hit = product.name.to_lowercase().contains(&query);
                let description_hit = product.description.to_lowercase().contains(&query);
                if !name_hit && !description_hit {
                    return false;
                }
            }
        }

        if let Some((lo, hi)) = self.price_range {
            let price = product.discounted_price();
            if price < lo || price > hi {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }

        true
    }

    /// Apply the filter, preserving source order.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// One window of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The 1-based page number that was requested (clamped to at least 1).
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero when `page_size` is zero.
    pub total_pages: usize,
}

/// Slice `items` into the 1-based window `page` of `page_size` entries.
///
/// A page past the end yields an empty window but still reports the true
/// totals, so callers can render page controls from any starting point.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();

    if page_size == 0 {
        return Page {
            items: Vec::new(),
            page,
            page_size,
            total_items,
            total_pages: 0,
        };
    }

    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let window = items.iter().skip(start).take(page_size).cloned().collect();

    Page {
        items: window,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::product;
    use super::*;

    fn sample() -> Vec<Product> {
        let mut p1 = product("1", 100, 10); // discounted 90
        p1.name = "Paracetamol 500mg".to_owned();
        p1.description = "Fast fever relief".to_owned();
        p1.category = "Fever".to_owned();
        p1.brand = "HealthPlus".to_owned();

        let mut p2 = product("2", 200, 0); // discounted 200
        p2.name = "Vitamin C Tablets".to_owned();
        p2.description = "Daily immunity supplement".to_owned();
        p2.category = "Vitamins".to_owned();
        p2.brand = "VitaEssence".to_owned();

        let mut p3 = product("3", 150, 20); // discounted 120
        p3.name = "Cough Syrup".to_owned();
        p3.description = "Soothes throat and relieves cough".to_owned();
        p3.category = "Cold & Cough".to_owned();
        p3.brand = "HealthPlus".to_owned();

        vec![p1, p2, p3]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_matches_all_in_order() {
        let products = sample();
        assert_eq!(ids(&ProductFilter::new().apply(&products)), ["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let products = sample();
        let by_name = ProductFilter::new().with_search("PARACETAMOL").apply(&products);
        assert_eq!(ids(&by_name), ["1"]);

        let by_description = ProductFilter::new().with_search("immunity").apply(&products);
        assert_eq!(ids(&by_description), ["2"]);

        let miss = ProductFilter::new().with_search("antibiotic").apply(&products);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_price_range_uses_discounted_price() {
        let products = sample();
        // Product 3 lists at 150 but discounts to 120; a 100-130 window
        // must catch it and exclude the others.
        let filter = ProductFilter::new()
            .with_price_range(Decimal::from(100), Decimal::from(130));
        assert_eq!(ids(&filter.apply(&products)), ["3"]);

        // Bounds are inclusive.
        let exact = ProductFilter::new()
            .with_price_range(Decimal::from(90), Decimal::from(90));
        assert_eq!(ids(&exact.apply(&products)), ["1"]);
    }

    #[test]
    fn test_multi_value_dimension_is_a_union() {
        let products = sample();
        let filter = ProductFilter::new()
            .with_category("Fever")
            .with_category("Vitamins");
        assert_eq!(ids(&filter.apply(&products)), ["1", "2"]);
    }

    #[test]
    fn test_dimensions_combine_conjunctively() {
        let products = sample();

        let by_category = ProductFilter::new().with_category("Fever").apply(&products);
        let by_brand = ProductFilter::new().with_brand("HealthPlus").apply(&products);
        let combined = ProductFilter::new()
            .with_category("Fever")
            .with_brand("HealthPlus")
            .apply(&products);

        // Conjunction equals the intersection of the single-dimension results.
        let intersection: Vec<&Product> = by_category
            .iter()
            .filter(|p| by_brand.iter().any(|q| q.id == p.id))
            .collect();
        assert_eq!(
            ids(&combined),
            intersection.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
        );
        assert_eq!(ids(&combined), ["1"]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let products = sample();
        let filter = ProductFilter::new().with_search("   ");
        assert_eq!(filter.apply(&products).len(), products.len());
    }

    #[test]
    fn test_pagination_windows() {
        let items: Vec<u32> = (1..=7).collect();

        let first = paginate(&items, 1, 3);
        assert_eq!(first.items, [1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 7);

        let last = paginate(&items, 3, 3);
        assert_eq!(last.items, [7]);

        let past_end = paginate(&items, 9, 3);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn test_pagination_partitions_exactly() {
        let products = sample();
        let filtered = ProductFilter::new().with_brand("HealthPlus").apply(&products);

        let page_size = 1;
        let total_pages = paginate(&filtered, 1, page_size).total_pages;
        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            reassembled.extend(paginate(&filtered, page, page_size).items);
        }
        assert_eq!(reassembled, filtered);
    }

    #[test]
    fn test_pagination_degenerate_inputs() {
        let items: Vec<u32> = vec![1, 2];

        // Page size zero cannot produce pages.
        let none = paginate(&items, 1, 0);
        assert!(none.items.is_empty());
        assert_eq!(none.total_pages, 0);

        // Page zero is clamped to the first page.
        let clamped = paginate(&items, 0, 10);
        assert_eq!(clamped.items, [1, 2]);
        assert_eq!(clamped.page, 1);

        // Empty input has zero pages.
        let empty: Page<u32> = paginate(&[], 1, 10);
        assert_eq!(empty.total_pages, 0);
    }
}
