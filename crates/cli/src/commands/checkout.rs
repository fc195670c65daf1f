//! Build a cart from the command line and hand it off to WhatsApp.
//!
//! # Usage
//!
//! ```bash
//! toyclub checkout --item plush-cuddle-bear=24 --item veh-turbo-racer
//! ```
//!
//! Items without a quantity are added at the product's minimum order.

use std::io::Write;

use thiserror::Error;
use toyclub_storefront::StorefrontSession;

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub id: String,
    pub quantity: Option<u32>,
}

/// Errors from parsing an `--item` argument.
#[derive(Debug, Error)]
pub enum ItemArgError {
    #[error("item id is empty")]
    EmptyId,

    #[error("invalid quantity '{0}': expected a positive whole number")]
    InvalidQuantity(String),
}

/// Parse `id` or `id=quantity`.
///
/// # Errors
///
/// Returns an error for an empty id or a quantity that is not a positive
/// integer.
pub fn parse_item(s: &str) -> Result<ItemArg, ItemArgError> {
    let (id, quantity) = match s.split_once('=') {
        Some((id, qty)) => {
            let qty = qty.trim();
            let quantity = qty
                .parse::<u32>()
                .ok()
                .filter(|q| *q > 0)
                .ok_or_else(|| ItemArgError::InvalidQuantity(qty.to_string()))?;
            (id.trim(), Some(quantity))
        }
        None => (s.trim(), None),
    };

    if id.is_empty() {
        return Err(ItemArgError::EmptyId);
    }

    Ok(ItemArg {
        id: id.to_string(),
        quantity,
    })
}

/// Add the items to the session cart, check out and print the handoff.
///
/// # Errors
///
/// Returns an error if an item is not in the catalog, the checkout fails or
/// writing to stdout fails.
pub fn run(
    session: &mut StorefrontSession,
    items: &[ItemArg],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for item in items {
        session.add_to_cart(&item.id, item.quantity)?;
    }

    let cart = session.cart();
    tracing::info!(
        lines = cart.len(),
        units = cart.total_quantity(),
        total = %cart.total_price(),
        "Cart ready for checkout"
    );

    let handoff = session.checkout_now()?;
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &handoff)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", handoff.message)?;
    writeln!(out)?;
    writeln!(out, "Open to send your order:")?;
    writeln!(out, "{}", handoff.url)?;
    Ok(())
}
