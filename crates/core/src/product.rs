//! Catalog product records.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, StockLevel};

/// A product in the static catalog.
///
/// Products are immutable once loaded. Cart lines hold the same `Arc<Product>`
/// allocation the catalog holds, so a line always reflects the catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in USD.
    pub price: Decimal,
    /// Image path or URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category tag used by the category filter (e.g. `"dolls"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Units on hand. `None` means the catalog does not track stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Wholesale minimum order quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order: Option<NonZeroU32>,
    /// Age-range label (e.g. `"3+"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    /// Shown in the featured carousel.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Unit price as a [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// Minimum order quantity, 1 when the catalog does not set one.
    #[must_use]
    pub fn min_order(&self) -> u32 {
        self.min_order.map_or(1, NonZeroU32::get)
    }

    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }

    /// Exact, case-sensitive category match. Uncategorized products never match.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}
