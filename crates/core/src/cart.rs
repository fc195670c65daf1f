//! Copy-on-write cart line collection.
//!
//! A [`Cart`] is an immutable value. Every change produces a new `Cart` backed
//! by a fresh allocation, so holders of an older snapshot never observe a
//! partially applied change, and change detection is a pointer comparison
//! ([`Cart::same_as`]).
//!
//! # Invariants
//!
//! - At most one line per product id; adding a product already present merges
//!   into the existing line.
//! - Lines keep insertion order across updates.
//! - Every line's quantity is at least the product's minimum order (1 when the
//!   product has none).

use std::sync::Arc;

use crate::product::Product;
use crate::types::Price;

/// One product in the cart and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLineItem {
    /// The catalog product this line refers to.
    #[must_use]
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.quantity)
    }

    /// Whether a one-unit decrement would stay at or above the minimum order.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.quantity > self.product.min_order()
    }
}

/// Result of adding a product to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// An existing line's quantity was increased.
    Updated,
}

/// An ordered, deduplicated collection of cart lines.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Arc<[CartLineItem]>,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            lines: Arc::from(Vec::new()),
        }
    }
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_lines(lines: Vec<CartLineItem>) -> Self {
        Self {
            lines: Arc::from(lines),
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.line(product_id).is_some()
    }

    /// Whether `other` is the very same snapshot (no change in between).
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }

    /// Sum of `price * quantity` over all lines; zero when empty.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines (the header badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into an existing line for the same id; otherwise appends a new
    /// line raised to the product's minimum order.
    #[must_use]
    pub fn with_added(&self, product: Arc<Product>, quantity: u32) -> (Self, AddOutcome) {
        let mut lines = self.lines.to_vec();

        if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return (Self::from_lines(lines), AddOutcome::Updated);
        }

        let quantity = quantity.max(product.min_order());
        lines.push(CartLineItem { product, quantity });
        (Self::from_lines(lines), AddOutcome::Added)
    }

    /// Remove the line for `product_id`. `None` when there is no such line.
    #[must_use]
    pub fn without(&self, product_id: &str) -> Option<Self> {
        if !self.contains(product_id) {
            return None;
        }

        let lines = self
            .lines
            .iter()
            .filter(|l| l.product.id != product_id)
            .cloned()
            .collect();
        Some(Self::from_lines(lines))
    }

    /// Set the quantity of `product_id`, clamped up to the minimum order.
    ///
    /// `None` when there is no such line.
    #[must_use]
    pub fn with_quantity(&self, product_id: &str, quantity: u32) -> Option<Self> {
        self.map_line(product_id, |line| {
            quantity.max(line.product.min_order())
        })
    }

    /// Add one unit to `product_id`. `None` when there is no such line.
    #[must_use]
    pub fn with_incremented(&self, product_id: &str) -> Option<Self> {
        self.map_line(product_id, |line| line.quantity.saturating_add(1))
    }

    /// Remove one unit from `product_id` unless that would go below the
    /// minimum order. `None` when there is no such line or it is at the floor.
    #[must_use]
    pub fn with_decremented(&self, product_id: &str) -> Option<Self> {
        if !self.line(product_id)?.can_decrement() {
            return None;
        }
        self.map_line(product_id, |line| line.quantity - 1)
    }

    fn map_line(
        &self,
        product_id: &str,
        quantity: impl Fn(&CartLineItem) -> u32,
    ) -> Option<Self> {
        if !self.contains(product_id) {
            return None;
        }

        let lines = self
            .lines
            .iter()
            .map(|l| {
                if l.product.id == product_id {
                    CartLineItem {
                        product: Arc::clone(&l.product),
                        quantity: quantity(l),
                    }
                } else {
                    l.clone()
                }
            })
            .collect();
        Some(Self::from_lines(lines))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use rust_decimal::Decimal;

    use super::*;
    use crate::types::ProductId;

    fn product(id: &str, cents: i64, min_order: Option<u32>) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::parse(id).unwrap(),
            name: format!("Toy {id}"),
            price: Decimal::new(cents, 2),
            image: format!("/{id}.png"),
            description: None,
            category: None,
            stock: None,
            min_order: min_order.and_then(NonZeroU32::new),
            age_range: None,
            featured: false,
        })
    }

    #[test]
    fn test_add_new_then_merge() {
        let p = product("a", 100, None);
        let (cart, outcome) = Cart::new().with_added(Arc::clone(&p), 2);
        assert_eq!(outcome, AddOutcome::Added);

        let (cart, outcome) = cart.with_added(p, 3);
        assert_eq!(outcome, AddOutcome::Updated);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line("a").unwrap().quantity(), 5);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let (cart, _) = Cart::new().with_added(product("b", 100, None), 1);
        let (cart, _) = cart.with_added(product("a", 100, None), 1);
        let (cart, _) = cart.with_added(product("b", 100, None), 1);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product().id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_new_line_raised_to_min_order() {
        let (cart, _) = Cart::new().with_added(product("bulk", 100, Some(12)), 1);
        assert_eq!(cart.line("bulk").unwrap().quantity(), 12);
    }

    #[test]
    fn test_mutation_produces_new_snapshot() {
        let before = Cart::new();
        let (after, _) = before.with_added(product("a", 100, None), 1);

        assert!(before.is_empty());
        assert!(!before.same_as(&after));
        assert!(after.same_as(&after.clone()));
    }

    #[test]
    fn test_without_absent_is_none() {
        let (cart, _) = Cart::new().with_added(product("a", 100, None), 1);
        assert!(cart.without("zzz").is_none());
        assert!(cart.without("a").unwrap().is_empty());
    }

    #[test]
    fn test_with_quantity_clamps() {
        let (cart, _) = Cart::new().with_added(product("a", 100, None), 4);
        let cart = cart.with_quantity("a", 0).unwrap();
        assert_eq!(cart.line("a").unwrap().quantity(), 1);

        let (cart, _) = cart.with_added(product("bulk", 100, Some(6)), 6);
        let cart = cart.with_quantity("bulk", 2).unwrap();
        assert_eq!(cart.line("bulk").unwrap().quantity(), 6);

        assert!(cart.with_quantity("missing", 3).is_none());
    }

    #[test]
    fn test_decrement_stops_at_floor() {
        let (cart, _) = Cart::new().with_added(product("bulk", 100, Some(3)), 4);
        let cart = cart.with_decremented("bulk").unwrap();
        assert_eq!(cart.line("bulk").unwrap().quantity(), 3);
        assert!(cart.with_decremented("bulk").is_none());

        let cart = cart.with_incremented("bulk").unwrap();
        assert_eq!(cart.line("bulk").unwrap().quantity(), 4);
    }

    #[test]
    fn test_totals() {
        let (cart, _) = Cart::new().with_added(product("a", 250, None), 3);
        let (cart, _) = cart.with_added(product("b", 1000, None), 1);

        assert_eq!(cart.total_price().amount, Decimal::new(1750, 2));
        assert_eq!(cart.total_quantity(), 4);
        assert!(Cart::new().total_price().is_zero());
    }

    #[test]
    fn test_total_saturates_on_huge_catalog_price() {
        let catalog = crate::Catalog::from_json(
            r#"[{"id":"vault","name":"Vault","price":"79228162514264337593543950335","image":"/v.png"}]"#,
        )
        .unwrap();
        let vault = Arc::clone(catalog.get("vault").unwrap());
        let (cart, _) = Cart::new().with_added(Arc::clone(&vault), 2);
        let (cart, _) = cart.with_added(product("a", 250, None), 1);

        assert_eq!(cart.line("vault").unwrap().line_total().amount, Decimal::MAX);
        assert_eq!(cart.total_price().amount, Decimal::MAX);
    }
}
