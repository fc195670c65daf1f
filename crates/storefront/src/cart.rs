//! The session cart store.
//!
//! [`CartStore`] is the single source of truth for cart contents during a
//! session. It wraps an immutable [`Cart`] value and swaps in a new value on
//! every change, so a snapshot taken with [`CartStore::snapshot`] never sees a
//! half-applied mutation. Views detect change with [`Cart::same_as`].
//!
//! Minimum order quantities are enforced here (through [`Cart`]), not by
//! callers: new lines start at the product's minimum order, quantity updates
//! are clamped up to it, and [`CartStore::decrement`] stops at it.

use std::sync::Arc;

use toyclub_core::{AddOutcome, Cart, CartLineItem, Price, Product};
use tracing::instrument;

use crate::notify::{Notification, Notifier};

/// Session-lifetime cart state with notifications.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// An empty cart reporting to `notifier`.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cart: Cart::new(),
            notifier,
        }
    }

    /// The current cart value. Cheap: shares the underlying allocation.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.lines()
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.cart.line(product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) {
        let name = product.name.clone();
        let (cart, outcome) = self.cart.with_added(product, quantity);
        self.cart = cart;

        let message = match outcome {
            AddOutcome::Added => format!("Added {name} to cart"),
            AddOutcome::Updated => format!("Updated {name} quantity in cart"),
        };
        tracing::debug!(?outcome, lines = self.cart.len(), "Cart item added");
        self.notifier.notify(Notification::success(message));
    }

    /// Remove the line for `product_id`.
    ///
    /// Absent ids are a no-op and produce no notification.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &str) {
        match self.cart.without(product_id) {
            Some(cart) => {
                self.cart = cart;
                self.notifier
                    .notify(Notification::info("Item removed from cart"));
            }
            None => tracing::debug!("Remove ignored, product not in cart"),
        }
    }

    /// Set the quantity for `product_id`, clamped up to the minimum order.
    /// No-op if the product is not in the cart.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(cart) = self.cart.with_quantity(product_id, quantity) {
            self.cart = cart;
        } else {
            tracing::debug!("Update ignored, product not in cart");
        }
    }

    /// Add one unit. Returns whether the cart changed.
    pub fn increment(&mut self, product_id: &str) -> bool {
        self.replace(self.cart.with_incremented(product_id))
    }

    /// Remove one unit unless the line is at its minimum order. Returns
    /// whether the cart changed.
    pub fn decrement(&mut self, product_id: &str) -> bool {
        self.replace(self.cart.with_decremented(product_id))
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart = Cart::new();
        self.notifier.notify(Notification::info("Cart cleared"));
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Sum of quantities (the header badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    fn replace(&mut self, next: Option<Cart>) -> bool {
        match next {
            Some(cart) => {
                self.cart = cart;
                true
            }
            None => false,
        }
    }
}
