//! Product filter criteria and the filter pipeline.
//!
//! [`apply_filters`] is a pure function of the catalog and the criteria: it
//! never reorders or mutates the catalog, and calling it twice with the same
//! inputs yields the same list. All active dimensions combine with AND.
//!
//! The price dimension is "active" when the selected range differs from the
//! reference range `[0, ceiling]`. The default ceiling is
//! [`DEFAULT_PRICE_CEILING`]; [`FilterCriteria::for_catalog`] derives it from
//! the catalog instead so expensive products stay reachable.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::Product;

/// Upper bound of the default price range.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::ONE_HUNDRED;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// The active filter selection for a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact category tag; `None` means any category.
    pub category: Option<String>,
    /// Selected price bounds.
    pub price: PriceRange,
    /// Upper bound of the untouched price range.
    pub price_ceiling: Decimal,
    /// Substring matched against the age-range label; `None` means any age.
    pub age_range: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl FilterCriteria {
    /// No filters, with the given reference price ceiling.
    #[must_use]
    pub const fn with_ceiling(price_ceiling: Decimal) -> Self {
        Self {
            category: None,
            price: PriceRange::new(Decimal::ZERO, price_ceiling),
            price_ceiling,
            age_range: None,
        }
    }

    /// No filters, with the price ceiling taken from the catalog's most
    /// expensive product (never below [`DEFAULT_PRICE_CEILING`]).
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let ceiling = catalog
            .max_price()
            .map_or(DEFAULT_PRICE_CEILING, |max| max.max(DEFAULT_PRICE_CEILING));
        Self::with_ceiling(ceiling)
    }

    /// Seed criteria from a navigation query string such as
    /// `category=dolls&age=3%2B`.
    ///
    /// Recognized keys: `category`, `age`, `min_price`, `max_price`. Unknown
    /// keys and unparsable prices are ignored.
    #[must_use]
    pub fn from_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" => self.set_category(&value),
                "age" => self.set_age_range(&value),
                "min_price" => {
                    if let Ok(min) = value.parse::<Decimal>() {
                        self.price.min = min;
                    }
                }
                "max_price" => {
                    if let Ok(max) = value.parse::<Decimal>() {
                        self.price.max = max;
                    }
                }
                _ => {}
            }
        }
        self
    }

    /// Select a category; an empty string clears the category filter.
    pub fn set_category(&mut self, category: &str) {
        self.category = non_empty(category);
    }

    /// Select `category`, or clear it if it is already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.set_category(category);
        }
    }

    /// Select an age range; an empty string clears the age filter.
    pub fn set_age_range(&mut self, range: &str) {
        self.age_range = non_empty(range);
    }

    /// Select `range`, or clear it if it is already selected.
    pub fn toggle_age_range(&mut self, range: &str) {
        if self.age_range.as_deref() == Some(range) {
            self.age_range = None;
        } else {
            self.set_age_range(range);
        }
    }

    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.price = PriceRange::new(min, max);
    }

    /// Reset every dimension, keeping the reference ceiling.
    pub fn clear(&mut self) {
        *self = Self::with_ceiling(self.price_ceiling);
    }

    /// Whether the selected bounds differ from `[0, ceiling]`.
    #[must_use]
    pub fn price_filter_active(&self) -> bool {
        self.price.min > Decimal::ZERO || self.price.max < self.price_ceiling
    }

    /// Whether any dimension restricts the listing.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || self.age_range.is_some() || self.price_filter_active()
    }

    /// Whether `product` passes every active dimension.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.in_category(category) {
                return false;
            }
        }

        if self.price_filter_active() && !self.price.contains(product.price) {
            return false;
        }

        if let Some(range) = &self.age_range {
            return product
                .age_range
                .as_deref()
                .is_some_and(|label| label.contains(range.as_str()));
        }

        true
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

/// Products from `catalog` satisfying `criteria`, in catalog order.
#[must_use]
pub fn apply_filters(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Arc<Product>> {
    catalog
        .products()
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id":"d1","name":"Doll A","price":"15.00","image":"/1.png","category":"dolls","ageRange":"3+"},
        {"id":"v1","name":"Car","price":"5.00","image":"/2.png","category":"vehicles","ageRange":"3+"},
        {"id":"d2","name":"Doll B","price":"40.00","image":"/3.png","category":"dolls","ageRange":"12+"},
        {"id":"r1","name":"Robot","price":"129.00","image":"/4.png","category":"educational","ageRange":"8+"},
        {"id":"x1","name":"Grab Bag","price":"3.00","image":"/5.png"}
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json(SAMPLE).unwrap()
    }

    fn ids(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_returns_full_catalog() {
        let catalog = catalog();
        let criteria = FilterCriteria::default();
        assert!(!criteria.has_active_filters());
        assert_eq!(apply_filters(&catalog, &criteria).len(), catalog.len());
    }

    #[test]
    fn test_category_exact_match_in_order() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_category("dolls");

        let first = apply_filters(&catalog, &criteria);
        assert_eq!(ids(&first), vec!["d1", "d2"]);
        assert_eq!(first, apply_filters(&catalog, &criteria));

        criteria.set_category("Dolls");
        assert!(apply_filters(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_touching_min_price_uses_default_ceiling() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_price_range(Decimal::from(1), DEFAULT_PRICE_CEILING);

        assert!(criteria.price_filter_active());
        assert_eq!(ids(&apply_filters(&catalog, &criteria)), vec!["d1", "v1", "d2", "x1"]);
    }

    #[test]
    fn test_catalog_ceiling_keeps_expensive_products() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::for_catalog(&catalog);
        assert_eq!(criteria.price_ceiling, Decimal::from(129));

        criteria.set_price_range(Decimal::from(10), criteria.price_ceiling);
        assert_eq!(ids(&apply_filters(&catalog, &criteria)), vec!["d1", "d2", "r1"]);
    }

    #[test]
    fn test_for_empty_catalog_uses_default_ceiling() {
        let criteria = FilterCriteria::for_catalog(&Catalog::default());
        assert_eq!(criteria.price_ceiling, DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn test_age_range_substring() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_age_range("3+");
        assert_eq!(ids(&apply_filters(&catalog, &criteria)), vec!["d1", "v1"]);

        criteria.set_age_range("2+");
        assert_eq!(ids(&apply_filters(&catalog, &criteria)), vec!["d2"]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_category("dolls");
        criteria.set_price_range(Decimal::ZERO, Decimal::from(20));
        assert_eq!(ids(&apply_filters(&catalog, &criteria)), vec!["d1"]);
    }

    #[test]
    fn test_toggles_and_clear() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("plush");
        assert_eq!(criteria.category.as_deref(), Some("plush"));
        criteria.toggle_category("plush");
        assert!(criteria.category.is_none());

        criteria.toggle_age_range("6+");
        criteria.toggle_age_range("8+");
        assert_eq!(criteria.age_range.as_deref(), Some("8+"));

        criteria.set_price_range(Decimal::from(5), Decimal::from(50));
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_empty_category_means_no_filter() {
        let mut criteria = FilterCriteria::default();
        criteria.set_category("");
        assert!(criteria.category.is_none());
    }

    #[test]
    fn test_from_query() {
        let criteria =
            FilterCriteria::default().from_query("?category=dolls&age=3%2B&min_price=2.5&foo=bar");
        assert_eq!(criteria.category.as_deref(), Some("dolls"));
        assert_eq!(criteria.age_range.as_deref(), Some("3+"));
        assert_eq!(criteria.price.min, Decimal::new(25, 1));
        assert_eq!(criteria.price.max, DEFAULT_PRICE_CEILING);

        let untouched = FilterCriteria::default().from_query("max_price=abc");
        assert!(!untouched.has_active_filters());
    }
}
