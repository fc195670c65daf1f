//! Order summary formatting for the checkout handoff.
//!
//! Checkout does not take payment. The cart is rendered into a plain-text
//! order message that the storefront hands to a messaging channel, where the
//! sales team confirms it by hand.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::Price;

/// Number of trailing timestamp digits used in an order id.
const ORDER_ID_DIGITS: i64 = 100_000_000;

/// Human-facing order reference, e.g. `TC-12345678`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Derive an order id from the last eight digits of the millisecond
    /// timestamp `at`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use toyclub_core::OrderId;
    ///
    /// let at = Utc.timestamp_millis_opt(1_717_171_717_171).unwrap();
    /// assert_eq!(OrderId::from_timestamp("TC", at).as_str(), "TC-71717171");
    /// ```
    #[must_use]
    pub fn from_timestamp(prefix: &str, at: DateTime<Utc>) -> Self {
        let digits = at.timestamp_millis().rem_euclid(ORDER_ID_DIGITS);
        Self(format!("{prefix}-{digits:08}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Price,
}

/// A formatted snapshot of the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub store_name: String,
    pub order_id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: Price,
}

impl OrderSummary {
    /// Snapshot `cart` under `order_id`.
    #[must_use]
    pub fn from_cart(store_name: &str, order_id: OrderId, cart: &Cart) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                name: line.product().name.clone(),
                quantity: line.quantity(),
                line_total: line.line_total(),
            })
            .collect();

        Self {
            store_name: store_name.to_owned(),
            order_id,
            lines,
            total: cart.total_price(),
        }
    }

    /// The plain-text order message.
    ///
    /// ```text
    /// ToyClub Wholesale Order:
    /// - Cuddle Bear Plush, Quantity: 24, Price: $210.00
    /// Total: $210.00
    /// Order ID: TC-71717171
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        let details = self
            .lines
            .iter()
            .map(|l| format!("- {}, Quantity: {}, Price: {}", l.name, l.quantity, l.line_total))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{} Wholesale Order:\n{details}\nTotal: {}\nOrder ID: {}",
            self.store_name, self.total, self.order_id
        )
    }
}
