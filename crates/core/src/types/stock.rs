//! Stock availability levels shown on product cards.

use serde::{Deserialize, Serialize};

/// Availability bucket derived from a product's stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// More than 100 units.
    InStock,
    /// 21 to 100 units.
    Limited,
    /// 20 units or fewer.
    Low,
    /// The catalog does not track stock for this product.
    Untracked,
}

impl StockLevel {
    /// Units above which stock counts as plentiful.
    pub const IN_STOCK_THRESHOLD: u32 = 100;
    /// Units above which stock counts as limited rather than low.
    pub const LIMITED_THRESHOLD: u32 = 20;

    /// Classify a stock count.
    #[must_use]
    pub const fn from_stock(stock: Option<u32>) -> Self {
        match stock {
            None => Self::Untracked,
            Some(n) if n > Self::IN_STOCK_THRESHOLD => Self::InStock,
            Some(n) if n > Self::LIMITED_THRESHOLD => Self::Limited,
            Some(_) => Self::Low,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::Limited => "Limited Stock",
            Self::Low => "Low Stock",
            Self::Untracked => "Available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(StockLevel::from_stock(Some(101)), StockLevel::InStock);
        assert_eq!(StockLevel::from_stock(Some(100)), StockLevel::Limited);
        assert_eq!(StockLevel::from_stock(Some(21)), StockLevel::Limited);
        assert_eq!(StockLevel::from_stock(Some(20)), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(Some(0)), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(None), StockLevel::Untracked);
    }
}
