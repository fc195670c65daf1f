//! WhatsApp checkout handoff.
//!
//! Checkout turns the cart into an order message and a `wa.me` link that
//! opens a chat with the sales number, pre-filled with the message. The
//! storefront's part ends once the link is built.

use serde::Serialize;
use thiserror::Error;
use toyclub_core::OrderSummary;
use url::Url;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The handoff link could not be built.
    #[error("invalid WhatsApp URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Builds `wa.me` links for a fixed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl WhatsAppLink {
    /// Links to `number` (E.164 with leading `+`, already validated by config).
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// A link opening a chat pre-filled with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the number makes the URL unparsable.
    pub fn url(&self, message: &str) -> Result<Url, CheckoutError> {
        // Escapes `!'()*` too, unlike `encodeURIComponent`; the decoded text is identical.
        let url = format!(
            "{WHATSAPP_BASE_URL}{}?text={}",
            self.number,
            urlencoding::encode(message)
        );
        Ok(Url::parse(&url)?)
    }
}

/// Everything the caller needs to complete a checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutHandoff {
    pub summary: OrderSummary,
    pub message: String,
    pub url: Url,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_message() {
        let link = WhatsAppLink::new("+919846494210");
        let url = link.url("ToyClub Wholesale Order:\n- Teddy, Quantity: 2, Price: $5.00").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/+919846494210");
        assert_eq!(
            url.query(),
            Some("text=ToyClub%20Wholesale%20Order%3A%0A-%20Teddy%2C%20Quantity%3A%202%2C%20Price%3A%20%245.00")
        );
    }

    #[test]
    fn test_url_round_trips_text() {
        let link = WhatsAppLink::new("+15551234567");
        let message = "Total: $17.50\nOrder ID: TC-12345678";
        let url = link.url(message).unwrap();

        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, message);
    }

    #[test]
    fn test_url_reserved_marks_decode_unchanged() {
        let link = WhatsAppLink::new("+15551234567");
        let message = "- Kid's Kite (Large)! *new*, Quantity: 1, Price: $9.99";
        let url = link.url(message).unwrap();

        let query = url.query().unwrap();
        for escaped in ["%21", "%27", "%28", "%29", "%2A"] {
            assert!(query.contains(escaped), "{escaped} missing from {query}");
        }

        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, message);
    }
}
