//! The static product catalog.
//!
//! The catalog is loaded once, validated, and then shared read-only. Products
//! are held behind `Arc` so cart lines can reference them without copying.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::product::Product;
use crate::types::ProductId;

/// The catalog shipped with the storefront.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// How many related products a detail page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Known category tags and their display names, in navigation order.
pub const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("action-figures", "Action Figures"),
    ("plush", "Plush Toys"),
    ("dolls", "Dolls"),
    ("vehicles", "Vehicles"),
    ("educational", "Educational"),
    ("board-games", "Board Games"),
    ("construction", "Construction"),
    ("creative", "Arts & Crafts"),
];

/// Display name for a category tag, if it is a known category.
#[must_use]
pub fn category_name(tag: &str) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(id, _)| *id == tag)
        .map(|(_, name)| *name)
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has a negative price.
    #[error("product {id} has negative price {price}")]
    NegativePrice {
        /// Offending product.
        id: ProductId,
        /// The price as loaded.
        price: Decimal,
    },
}

/// An ordered, validated, read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Build a catalog from products, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if ids are not unique or a price is negative.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// The catalog bundled with the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled data is corrupt.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    /// Up to `limit` other products in the same category as `id`.
    ///
    /// Returns nothing for unknown or uncategorized products.
    #[must_use]
    pub fn related(&self, id: &str, limit: usize) -> Vec<Arc<Product>> {
        let Some(category) = self.get(id).and_then(|p| p.category.as_deref()) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.id != id && p.in_category(category))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Distinct category tags in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter_map(|p| p.category.as_deref())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Highest unit price in the catalog, `None` when empty.
    #[must_use]
    pub fn max_price(&self) -> Option<Decimal> {
        self.products.iter().map(|p| p.price).max()
    }
}
